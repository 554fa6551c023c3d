use sea_orm::DatabaseConnection;

use crate::server::{
    data::service_group::ServiceGroupRepository,
    error::AppError,
    model::{
        page::{PageParam, Paginated},
        service_group::{CreateServiceGroupParam, ServiceGroup, UpdateServiceGroupParam},
    },
    service::check::{ensure_jurisdiction, require_text, require_text_if_present},
};

pub struct ServiceGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateServiceGroupParam) -> Result<ServiceGroup, AppError> {
        require_text("Code", &params.code)?;
        require_text("Name", &params.name)?;
        ensure_jurisdiction(self.db, params.jurisdiction_id).await?;
        self.ensure_unique(None, &params.code, &params.name).await?;

        Ok(ServiceGroupRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ServiceGroup>, AppError> {
        Ok(ServiceGroupRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        param: &PageParam,
    ) -> Result<Paginated<ServiceGroup>, AppError> {
        Ok(ServiceGroupRepository::new(self.db)
            .get_paginated(param)
            .await?)
    }

    /// Returns None if the group doesn't exist
    pub async fn update(
        &self,
        params: UpdateServiceGroupParam,
    ) -> Result<Option<ServiceGroup>, AppError> {
        let repo = ServiceGroupRepository::new(self.db);

        let Some(current) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        require_text_if_present("Code", params.code.as_deref())?;
        require_text_if_present("Name", params.name.as_deref())?;
        ensure_jurisdiction(self.db, params.jurisdiction_id).await?;

        let code = params.code.as_deref().unwrap_or(&current.code);
        let name = params.name.as_deref().unwrap_or(&current.name);
        self.ensure_unique(Some(params.id), code, name).await?;

        Ok(Some(repo.update(params).await?))
    }

    /// Returns false if not found, BadRequest while services or requests belong to it
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ServiceGroupRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if repo.is_referenced(id).await? {
            return Err(AppError::BadRequest(
                "Service group still has services or service requests".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(true)
    }

    async fn ensure_unique(&self, id: Option<i32>, code: &str, name: &str) -> Result<(), AppError> {
        let existing = ServiceGroupRepository::new(self.db)
            .find_by_code_or_name(code, name)
            .await?;

        match existing {
            Some(other) if Some(other.id) != id => Err(AppError::Conflict(format!(
                "Service group with code '{}' or name '{}' already exists",
                code, name
            ))),
            _ => Ok(()),
        }
    }
}
