use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    page::{PageParam, Paginated},
    setting::{CreateSettingParam, Setting, UpdateSettingParam},
};

pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateSettingParam) -> Result<Setting, DbErr> {
        let now = Utc::now();
        let entity = entity::setting::ActiveModel {
            key: ActiveValue::Set(params.key),
            name: ActiveValue::Set(params.name),
            value: ActiveValue::Set(params.value),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Setting::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Setting>, DbErr> {
        let entity = entity::prelude::Setting::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Setting::from_entity))
    }

    pub async fn find_by_key(&self, key: &str) -> Result<Option<Setting>, DbErr> {
        let entity = entity::prelude::Setting::find()
            .filter(entity::setting::Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(entity.map(Setting::from_entity))
    }

    pub async fn get_paginated(&self, param: &PageParam) -> Result<Paginated<Setting>, DbErr> {
        let mut query = entity::prelude::Setting::find();
        if let Some(q) = &param.q {
            query = query.filter(
                Condition::any()
                    .add(entity::setting::Column::Name.contains(q))
                    .add(entity::setting::Column::Key.contains(q)),
            );
        }

        let paginator = query
            .order_by_asc(entity::setting::Column::Key)
            .paginate(self.db, param.limit);

        let total = paginator.num_items().await?;
        let settings = paginator
            .fetch_page(param.index())
            .await?
            .into_iter()
            .map(Setting::from_entity)
            .collect();

        Ok(Paginated::new(settings, total, param))
    }

    pub async fn update(&self, params: UpdateSettingParam) -> Result<Setting, DbErr> {
        let setting = entity::prelude::Setting::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Setting with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::setting::ActiveModel = setting.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(value) = params.value {
            active_model.value = ActiveValue::Set(value);
        }
        if params.description.is_some() {
            active_model.description = ActiveValue::Set(params.description);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Setting::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Setting::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
