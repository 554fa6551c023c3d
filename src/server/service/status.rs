use sea_orm::DatabaseConnection;

use crate::server::{
    data::status::StatusRepository,
    error::AppError,
    model::{
        page::{PageParam, Paginated},
        status::{CreateStatusParam, Status, UpdateStatusParam},
    },
    service::check::{ensure_jurisdiction, require_text, require_text_if_present},
};

pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a status, rejecting a name that is already taken
    pub async fn create(&self, params: CreateStatusParam) -> Result<Status, AppError> {
        require_text("Name", &params.name)?;
        ensure_jurisdiction(self.db, params.jurisdiction_id).await?;

        let repo = StatusRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Status '{}' already exists",
                params.name
            )));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Status>, AppError> {
        Ok(StatusRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(&self, param: &PageParam) -> Result<Paginated<Status>, AppError> {
        Ok(StatusRepository::new(self.db).get_paginated(param).await?)
    }

    /// Status given to newly reported requests
    pub async fn get_default(&self) -> Result<Option<Status>, AppError> {
        Ok(StatusRepository::new(self.db).find_default().await?)
    }

    /// Updates a status
    /// Returns None if the status doesn't exist
    pub async fn update(&self, params: UpdateStatusParam) -> Result<Option<Status>, AppError> {
        let repo = StatusRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        require_text_if_present("Name", params.name.as_deref())?;
        ensure_jurisdiction(self.db, params.jurisdiction_id).await?;

        if let Some(name) = &params.name {
            if let Some(other) = repo.find_by_name(name).await? {
                if other.id != params.id {
                    return Err(AppError::Conflict(format!("Status '{}' already exists", name)));
                }
            }
        }

        Ok(Some(repo.update(params).await?))
    }

    /// Deletes a status
    /// Returns false if not found, BadRequest while requests still use it
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = StatusRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if repo.is_referenced(id).await? {
            return Err(AppError::BadRequest(
                "Status is in use by service requests".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
