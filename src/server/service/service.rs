use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        priority::PriorityRepository, service::ServiceRepository,
        service_group::ServiceGroupRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        page::{PageParam, Paginated},
        service::{CreateServiceParam, ServiceWithRelations, UpdateServiceParam},
    },
    service::check::{ensure_jurisdiction, require_text, require_text_if_present},
};

pub struct ServiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a service under an existing group
    pub async fn create(
        &self,
        params: CreateServiceParam,
    ) -> Result<ServiceWithRelations, AppError> {
        require_text("Code", &params.code)?;
        require_text("Name", &params.name)?;

        let repo = ServiceRepository::new(self.db);

        self.ensure_unique(None, &params.code, &params.name).await?;
        self.ensure_group(params.group_id).await?;
        if let Some(priority_id) = params.priority_id {
            self.ensure_priority(priority_id).await?;
        }
        ensure_jurisdiction(self.db, params.jurisdiction_id).await?;

        let service = repo.create(params).await?;

        // Fetch with group and priority references
        repo.get_by_id(service.id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    resource: "Service",
                    id: service.id,
                }
                .into()
            })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ServiceWithRelations>, AppError> {
        Ok(ServiceRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        param: &PageParam,
    ) -> Result<Paginated<ServiceWithRelations>, AppError> {
        Ok(ServiceRepository::new(self.db).get_paginated(param).await?)
    }

    /// Returns None if the service doesn't exist
    pub async fn update(
        &self,
        params: UpdateServiceParam,
    ) -> Result<Option<ServiceWithRelations>, AppError> {
        let repo = ServiceRepository::new(self.db);

        let Some(current) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        require_text_if_present("Code", params.code.as_deref())?;
        require_text_if_present("Name", params.name.as_deref())?;

        let code = params.code.as_deref().unwrap_or(&current.code);
        let name = params.name.as_deref().unwrap_or(&current.name);
        self.ensure_unique(Some(params.id), code, name).await?;

        if let Some(group_id) = params.group_id {
            self.ensure_group(group_id).await?;
        }
        if let Some(priority_id) = params.priority_id {
            self.ensure_priority(priority_id).await?;
        }
        ensure_jurisdiction(self.db, params.jurisdiction_id).await?;

        let id = params.id;
        repo.update(params).await?;

        Ok(repo.get_by_id(id).await?)
    }

    /// Returns false if not found, BadRequest while requests were filed under it
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ServiceRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if repo.is_referenced(id).await? {
            return Err(AppError::BadRequest(
                "Service is in use by service requests".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(true)
    }

    async fn ensure_unique(&self, id: Option<i32>, code: &str, name: &str) -> Result<(), AppError> {
        let existing = ServiceRepository::new(self.db)
            .find_by_code_or_name(code, name)
            .await?;

        match existing {
            Some(other) if Some(other.id) != id => Err(AppError::Conflict(format!(
                "Service with code '{}' or name '{}' already exists",
                code, name
            ))),
            _ => Ok(()),
        }
    }

    async fn ensure_group(&self, group_id: i32) -> Result<(), AppError> {
        match ServiceGroupRepository::new(self.db)
            .find_by_id(group_id)
            .await?
        {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!(
                "Service group {} not found",
                group_id
            ))),
        }
    }

    async fn ensure_priority(&self, priority_id: i32) -> Result<(), AppError> {
        match PriorityRepository::new(self.db)
            .find_by_id(priority_id)
            .await?
        {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!(
                "Priority {} not found",
                priority_id
            ))),
        }
    }
}
