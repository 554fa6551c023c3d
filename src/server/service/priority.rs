use sea_orm::DatabaseConnection;

use crate::server::{
    data::priority::PriorityRepository,
    error::AppError,
    model::{
        page::{PageParam, Paginated},
        priority::{CreatePriorityParam, Priority, UpdatePriorityParam},
    },
    service::check::{ensure_jurisdiction, require_text, require_text_if_present},
};

pub struct PriorityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PriorityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a priority, rejecting a name that is already taken
    pub async fn create(&self, params: CreatePriorityParam) -> Result<Priority, AppError> {
        require_text("Name", &params.name)?;
        ensure_jurisdiction(self.db, params.jurisdiction_id).await?;

        let repo = PriorityRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Priority '{}' already exists",
                params.name
            )));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Priority>, AppError> {
        Ok(PriorityRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(&self, param: &PageParam) -> Result<Paginated<Priority>, AppError> {
        Ok(PriorityRepository::new(self.db).get_paginated(param).await?)
    }

    /// Priority applied to requests whose service names none
    pub async fn get_default(&self) -> Result<Option<Priority>, AppError> {
        Ok(PriorityRepository::new(self.db).find_default().await?)
    }

    /// Updates a priority
    /// Returns None if the priority doesn't exist
    pub async fn update(&self, params: UpdatePriorityParam) -> Result<Option<Priority>, AppError> {
        let repo = PriorityRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        require_text_if_present("Name", params.name.as_deref())?;
        ensure_jurisdiction(self.db, params.jurisdiction_id).await?;

        if let Some(name) = &params.name {
            if let Some(other) = repo.find_by_name(name).await? {
                if other.id != params.id {
                    return Err(AppError::Conflict(format!("Priority '{}' already exists", name)));
                }
            }
        }

        Ok(Some(repo.update(params).await?))
    }

    /// Deletes a priority
    /// Returns false if not found, BadRequest while services or requests still use it
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PriorityRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if repo.is_referenced(id).await? {
            return Err(AppError::BadRequest(
                "Priority is in use by services or service requests".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
