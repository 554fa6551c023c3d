use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        page::{PageParam, Paginated},
        service_group::{CreateServiceGroupParam, ServiceGroup, UpdateServiceGroupParam},
    },
    util::color::color_or_random,
};

pub struct ServiceGroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceGroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateServiceGroupParam) -> Result<ServiceGroup, DbErr> {
        let now = Utc::now();
        let entity = entity::service_group::ActiveModel {
            jurisdiction_id: ActiveValue::Set(params.jurisdiction_id),
            code: ActiveValue::Set(params.code),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            color: ActiveValue::Set(color_or_random(params.color)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ServiceGroup::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ServiceGroup>, DbErr> {
        let entity = entity::prelude::ServiceGroup::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ServiceGroup::from_entity))
    }

    pub async fn find_by_code_or_name(
        &self,
        code: &str,
        name: &str,
    ) -> Result<Option<ServiceGroup>, DbErr> {
        let entity = entity::prelude::ServiceGroup::find()
            .filter(
                Condition::any()
                    .add(entity::service_group::Column::Code.eq(code))
                    .add(entity::service_group::Column::Name.eq(name)),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(ServiceGroup::from_entity))
    }

    pub async fn get_paginated(
        &self,
        param: &PageParam,
    ) -> Result<Paginated<ServiceGroup>, DbErr> {
        let mut query = entity::prelude::ServiceGroup::find();
        if let Some(q) = &param.q {
            query = query.filter(
                Condition::any()
                    .add(entity::service_group::Column::Name.contains(q))
                    .add(entity::service_group::Column::Code.contains(q)),
            );
        }

        let paginator = query
            .order_by_asc(entity::service_group::Column::Name)
            .paginate(self.db, param.limit);

        let total = paginator.num_items().await?;
        let groups = paginator
            .fetch_page(param.index())
            .await?
            .into_iter()
            .map(ServiceGroup::from_entity)
            .collect();

        Ok(Paginated::new(groups, total, param))
    }

    pub async fn update(&self, params: UpdateServiceGroupParam) -> Result<ServiceGroup, DbErr> {
        let group = entity::prelude::ServiceGroup::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Service group with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::service_group::ActiveModel = group.into();
        if let Some(jurisdiction_id) = params.jurisdiction_id {
            active_model.jurisdiction_id = ActiveValue::Set(Some(jurisdiction_id));
        }
        if let Some(code) = params.code {
            active_model.code = ActiveValue::Set(code);
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if params.description.is_some() {
            active_model.description = ActiveValue::Set(params.description);
        }
        if let Some(color) = params.color {
            active_model.color = ActiveValue::Set(color_or_random(Some(color)));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(ServiceGroup::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ServiceGroup::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether services or service requests belong to the group
    pub async fn is_referenced(&self, id: i32) -> Result<bool, DbErr> {
        let services = entity::prelude::Service::find()
            .filter(entity::service::Column::GroupId.eq(id))
            .count(self.db)
            .await?;

        let requests = entity::prelude::ServiceRequest::find()
            .filter(entity::service_request::Column::GroupId.eq(id))
            .count(self.db)
            .await?;

        Ok(services + requests > 0)
    }
}
