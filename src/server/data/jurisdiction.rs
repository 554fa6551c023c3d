use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        jurisdiction::{CreateJurisdictionParam, Jurisdiction, UpdateJurisdictionParam},
        page::{PageParam, Paginated},
    },
    util::color::color_or_random,
};

pub struct JurisdictionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JurisdictionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateJurisdictionParam) -> Result<Jurisdiction, DbErr> {
        let now = Utc::now();
        let entity = entity::jurisdiction::ActiveModel {
            parent_id: ActiveValue::Set(params.parent_id),
            code: ActiveValue::Set(params.code),
            name: ActiveValue::Set(params.name),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            address: ActiveValue::Set(params.address),
            about: ActiveValue::Set(params.about),
            color: ActiveValue::Set(color_or_random(params.color)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Jurisdiction::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Jurisdiction>, DbErr> {
        let entity = entity::prelude::Jurisdiction::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Jurisdiction::from_entity))
    }

    /// Finds a jurisdiction holding either the code or the name
    pub async fn find_by_code_or_name(
        &self,
        code: &str,
        name: &str,
    ) -> Result<Option<Jurisdiction>, DbErr> {
        let entity = entity::prelude::Jurisdiction::find()
            .filter(
                Condition::any()
                    .add(entity::jurisdiction::Column::Code.eq(code))
                    .add(entity::jurisdiction::Column::Name.eq(name)),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(Jurisdiction::from_entity))
    }

    /// Gets paginated jurisdictions ordered by name, searching name and code
    pub async fn get_paginated(
        &self,
        param: &PageParam,
    ) -> Result<Paginated<Jurisdiction>, DbErr> {
        let mut query = entity::prelude::Jurisdiction::find();
        if let Some(q) = &param.q {
            query = query.filter(
                Condition::any()
                    .add(entity::jurisdiction::Column::Name.contains(q))
                    .add(entity::jurisdiction::Column::Code.contains(q)),
            );
        }

        let paginator = query
            .order_by_asc(entity::jurisdiction::Column::Name)
            .paginate(self.db, param.limit);

        let total = paginator.num_items().await?;
        let jurisdictions = paginator
            .fetch_page(param.index())
            .await?
            .into_iter()
            .map(Jurisdiction::from_entity)
            .collect();

        Ok(Paginated::new(jurisdictions, total, param))
    }

    pub async fn update(&self, params: UpdateJurisdictionParam) -> Result<Jurisdiction, DbErr> {
        let jurisdiction = entity::prelude::Jurisdiction::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Jurisdiction with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::jurisdiction::ActiveModel = jurisdiction.into();
        if let Some(parent_id) = params.parent_id {
            active_model.parent_id = ActiveValue::Set(Some(parent_id));
        }
        if let Some(code) = params.code {
            active_model.code = ActiveValue::Set(code);
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if params.phone.is_some() {
            active_model.phone = ActiveValue::Set(params.phone);
        }
        if params.email.is_some() {
            active_model.email = ActiveValue::Set(params.email);
        }
        if params.address.is_some() {
            active_model.address = ActiveValue::Set(params.address);
        }
        if params.about.is_some() {
            active_model.about = ActiveValue::Set(params.about);
        }
        if let Some(color) = params.color {
            active_model.color = ActiveValue::Set(color_or_random(Some(color)));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Jurisdiction::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Jurisdiction::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether child jurisdictions or service requests point at the jurisdiction
    pub async fn is_referenced(&self, id: i32) -> Result<bool, DbErr> {
        let children = entity::prelude::Jurisdiction::find()
            .filter(entity::jurisdiction::Column::ParentId.eq(id))
            .count(self.db)
            .await?;

        let requests = entity::prelude::ServiceRequest::find()
            .filter(entity::service_request::Column::JurisdictionId.eq(id))
            .count(self.db)
            .await?;

        Ok(children + requests > 0)
    }
}
