use sea_orm::DatabaseConnection;

use crate::server::{
    data::setting::SettingRepository,
    error::AppError,
    model::{
        page::{PageParam, Paginated},
        setting::{CreateSettingParam, Setting, UpdateSettingParam},
    },
};

pub struct SettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateSettingParam) -> Result<Setting, AppError> {
        let repo = SettingRepository::new(self.db);

        if params.key.is_empty() {
            return Err(AppError::BadRequest("Setting key is required".to_string()));
        }

        if repo.find_by_key(&params.key).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Setting '{}' already exists",
                params.key
            )));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Setting>, AppError> {
        Ok(SettingRepository::new(self.db).find_by_id(id).await?)
    }

    /// Keys are stored lowercase
    pub async fn get_by_key(&self, key: &str) -> Result<Option<Setting>, AppError> {
        Ok(SettingRepository::new(self.db)
            .find_by_key(&key.trim().to_lowercase())
            .await?)
    }

    pub async fn get_paginated(&self, param: &PageParam) -> Result<Paginated<Setting>, AppError> {
        Ok(SettingRepository::new(self.db).get_paginated(param).await?)
    }

    pub async fn update(&self, params: UpdateSettingParam) -> Result<Option<Setting>, AppError> {
        let repo = SettingRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        Ok(Some(repo.update(params).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = SettingRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
