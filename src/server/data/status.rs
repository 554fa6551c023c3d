use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        page::{PageParam, Paginated},
        status::{CreateStatusParam, Status, UpdateStatusParam},
    },
    util::color::color_or_random,
};

pub struct StatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new status, assigning a random color when none is given
    pub async fn create(&self, params: CreateStatusParam) -> Result<Status, DbErr> {
        let now = Utc::now();
        let entity = entity::status::ActiveModel {
            jurisdiction_id: ActiveValue::Set(params.jurisdiction_id),
            name: ActiveValue::Set(params.name),
            weight: ActiveValue::Set(params.weight),
            color: ActiveValue::Set(color_or_random(params.color)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Status::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Status>, DbErr> {
        let entity = entity::prelude::Status::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Status::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Status>, DbErr> {
        let entity = entity::prelude::Status::find()
            .filter(entity::status::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Status::from_entity))
    }

    /// Gets the status with the lowest weight, oldest first on ties
    pub async fn find_default(&self) -> Result<Option<Status>, DbErr> {
        let entity = entity::prelude::Status::find()
            .order_by_asc(entity::status::Column::Weight)
            .order_by_asc(entity::status::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Status::from_entity))
    }

    /// Gets paginated statuses ordered by weight, filtered by name when searching
    pub async fn get_paginated(&self, param: &PageParam) -> Result<Paginated<Status>, DbErr> {
        let mut query = entity::prelude::Status::find();
        if let Some(q) = &param.q {
            query = query.filter(entity::status::Column::Name.contains(q));
        }

        let paginator = query
            .order_by_asc(entity::status::Column::Weight)
            .order_by_asc(entity::status::Column::Name)
            .paginate(self.db, param.limit);

        let total = paginator.num_items().await?;
        let statuses = paginator
            .fetch_page(param.index())
            .await?
            .into_iter()
            .map(Status::from_entity)
            .collect();

        Ok(Paginated::new(statuses, total, param))
    }

    /// Applies the provided fields, keeping the rest unchanged
    pub async fn update(&self, params: UpdateStatusParam) -> Result<Status, DbErr> {
        let status = entity::prelude::Status::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Status with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::status::ActiveModel = status.into();
        if let Some(jurisdiction_id) = params.jurisdiction_id {
            active_model.jurisdiction_id = ActiveValue::Set(Some(jurisdiction_id));
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(weight) = params.weight {
            active_model.weight = ActiveValue::Set(weight);
        }
        if let Some(color) = params.color {
            active_model.color = ActiveValue::Set(color_or_random(Some(color)));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Status::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Status::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether any service request still carries the status
    pub async fn is_referenced(&self, id: i32) -> Result<bool, DbErr> {
        let requests = entity::prelude::ServiceRequest::find()
            .filter(entity::service_request::Column::StatusId.eq(id))
            .count(self.db)
            .await?;

        Ok(requests > 0)
    }
}
