use sea_orm::DatabaseConnection;

use crate::server::{
    data::permission::PermissionRepository,
    error::AppError,
    model::{
        page::{PageParam, Paginated},
        permission::{CreatePermissionParam, Permission},
    },
};

pub struct PermissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a permission, rejecting a `resource:action` pair that already exists
    pub async fn create(&self, params: CreatePermissionParam) -> Result<Permission, AppError> {
        let repo = PermissionRepository::new(self.db);

        if params.resource.is_empty() || params.action.is_empty() {
            return Err(AppError::BadRequest(
                "Permission resource and action are required".to_string(),
            ));
        }

        let wildcard = Permission::wildcard_for(&params.resource, &params.action);
        if repo.find_by_wildcard(&wildcard).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Permission '{}' already exists",
                wildcard
            )));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Permission>, AppError> {
        Ok(PermissionRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        param: &PageParam,
    ) -> Result<Paginated<Permission>, AppError> {
        Ok(PermissionRepository::new(self.db)
            .get_paginated(param)
            .await?)
    }

    /// Only the description is editable; the wildcard identifies the permission
    pub async fn update(
        &self,
        id: i32,
        description: Option<String>,
    ) -> Result<Option<Permission>, AppError> {
        let repo = PermissionRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        Ok(Some(repo.update_description(id, description).await?))
    }

    /// Removes the permission and every role grant of it
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PermissionRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
