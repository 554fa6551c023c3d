use sea_orm::DatabaseConnection;

use crate::server::{
    data::{permission::PermissionRepository, role::RoleRepository},
    error::AppError,
    model::{
        page::{PageParam, Paginated},
        role::{CreateRoleParam, Role, UpdateRoleParam},
    },
};

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a role granted the given permissions
    pub async fn create(&self, params: CreateRoleParam) -> Result<Role, AppError> {
        let repo = RoleRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Role '{}' already exists",
                params.name
            )));
        }
        self.ensure_permissions(&params.permission_ids).await?;

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Role>, AppError> {
        Ok(RoleRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(&self, param: &PageParam) -> Result<Paginated<Role>, AppError> {
        Ok(RoleRepository::new(self.db).get_paginated(param).await?)
    }

    /// Updates a role; a provided permission list replaces the current grants
    /// Returns None if the role doesn't exist
    pub async fn update(&self, params: UpdateRoleParam) -> Result<Option<Role>, AppError> {
        let repo = RoleRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        if let Some(name) = &params.name {
            if let Some(other) = repo.find_by_name(name).await? {
                if other.id != params.id {
                    return Err(AppError::Conflict(format!("Role '{}' already exists", name)));
                }
            }
        }
        if let Some(permission_ids) = &params.permission_ids {
            self.ensure_permissions(permission_ids).await?;
        }

        Ok(Some(repo.update(params).await?))
    }

    /// Returns false if not found, BadRequest while parties hold the role
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = RoleRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if repo.is_assigned(id).await? {
            return Err(AppError::BadRequest(
                "Role is assigned to one or more parties".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(true)
    }

    async fn ensure_permissions(&self, permission_ids: &[i32]) -> Result<(), AppError> {
        let existing = PermissionRepository::new(self.db)
            .existing_ids(permission_ids.to_vec())
            .await?;

        if let Some(missing) = permission_ids.iter().find(|id| !existing.contains(id)) {
            return Err(AppError::BadRequest(format!(
                "Permission {} not found",
                missing
            )));
        }

        Ok(())
    }
}
