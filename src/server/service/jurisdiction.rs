use sea_orm::DatabaseConnection;

use crate::server::{
    data::jurisdiction::JurisdictionRepository,
    error::AppError,
    model::{
        jurisdiction::{CreateJurisdictionParam, Jurisdiction, UpdateJurisdictionParam},
        page::{PageParam, Paginated},
    },
    service::check::{require_text, require_text_if_present},
};

pub struct JurisdictionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JurisdictionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateJurisdictionParam) -> Result<Jurisdiction, AppError> {
        require_text("Code", &params.code)?;
        require_text("Name", &params.name)?;

        let repo = JurisdictionRepository::new(self.db);

        self.ensure_unique(None, &params.code, &params.name).await?;
        if let Some(parent_id) = params.parent_id {
            self.ensure_parent(None, parent_id).await?;
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Jurisdiction>, AppError> {
        Ok(JurisdictionRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        param: &PageParam,
    ) -> Result<Paginated<Jurisdiction>, AppError> {
        Ok(JurisdictionRepository::new(self.db)
            .get_paginated(param)
            .await?)
    }

    /// Updates a jurisdiction
    /// Returns None if the jurisdiction doesn't exist
    pub async fn update(
        &self,
        params: UpdateJurisdictionParam,
    ) -> Result<Option<Jurisdiction>, AppError> {
        let repo = JurisdictionRepository::new(self.db);

        let Some(current) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        require_text_if_present("Code", params.code.as_deref())?;
        require_text_if_present("Name", params.name.as_deref())?;

        let code = params.code.as_deref().unwrap_or(&current.code);
        let name = params.name.as_deref().unwrap_or(&current.name);
        self.ensure_unique(Some(params.id), code, name).await?;

        if let Some(parent_id) = params.parent_id {
            self.ensure_parent(Some(params.id), parent_id).await?;
        }

        Ok(Some(repo.update(params).await?))
    }

    /// Deletes a jurisdiction
    /// Returns false if not found, BadRequest while children or requests point at it
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = JurisdictionRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if repo.is_referenced(id).await? {
            return Err(AppError::BadRequest(
                "Jurisdiction has child jurisdictions or service requests".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(true)
    }

    async fn ensure_unique(&self, id: Option<i32>, code: &str, name: &str) -> Result<(), AppError> {
        let existing = JurisdictionRepository::new(self.db)
            .find_by_code_or_name(code, name)
            .await?;

        match existing {
            Some(other) if Some(other.id) != id => Err(AppError::Conflict(format!(
                "Jurisdiction with code '{}' or name '{}' already exists",
                code, name
            ))),
            _ => Ok(()),
        }
    }

    async fn ensure_parent(&self, id: Option<i32>, parent_id: i32) -> Result<(), AppError> {
        if Some(parent_id) == id {
            return Err(AppError::BadRequest(
                "Jurisdiction cannot be its own parent".to_string(),
            ));
        }

        if JurisdictionRepository::new(self.db)
            .find_by_id(parent_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Parent jurisdiction {} not found",
                parent_id
            )));
        }

        Ok(())
    }
}
