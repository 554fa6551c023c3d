use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::reference::{unique_ids, ReferenceRepository},
    model::{
        page::{PageParam, Paginated},
        service::{CreateServiceParam, Service, ServiceWithRelations, UpdateServiceParam},
    },
    util::color::color_or_random,
};

pub struct ServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateServiceParam) -> Result<Service, DbErr> {
        let now = Utc::now();
        let entity = entity::service::ActiveModel {
            jurisdiction_id: ActiveValue::Set(params.jurisdiction_id),
            group_id: ActiveValue::Set(params.group_id),
            priority_id: ActiveValue::Set(params.priority_id),
            code: ActiveValue::Set(params.code),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            color: ActiveValue::Set(color_or_random(params.color)),
            is_external: ActiveValue::Set(params.is_external),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Service::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Service>, DbErr> {
        let entity = entity::prelude::Service::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Service::from_entity))
    }

    pub async fn find_by_code_or_name(
        &self,
        code: &str,
        name: &str,
    ) -> Result<Option<Service>, DbErr> {
        let entity = entity::prelude::Service::find()
            .filter(
                Condition::any()
                    .add(entity::service::Column::Code.eq(code))
                    .add(entity::service::Column::Name.eq(name)),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(Service::from_entity))
    }

    /// Gets a service with its group and default priority
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ServiceWithRelations>, DbErr> {
        let Some(service) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut services = self.with_relations(vec![service]).await?;

        Ok(services.pop())
    }

    /// Gets paginated services ordered by name, searching name and code
    pub async fn get_paginated(
        &self,
        param: &PageParam,
    ) -> Result<Paginated<ServiceWithRelations>, DbErr> {
        let mut query = entity::prelude::Service::find();
        if let Some(q) = &param.q {
            query = query.filter(
                Condition::any()
                    .add(entity::service::Column::Name.contains(q))
                    .add(entity::service::Column::Code.contains(q)),
            );
        }

        let paginator = query
            .order_by_asc(entity::service::Column::Name)
            .paginate(self.db, param.limit);

        let total = paginator.num_items().await?;
        let services = paginator
            .fetch_page(param.index())
            .await?
            .into_iter()
            .map(Service::from_entity)
            .collect();

        let services = self.with_relations(services).await?;

        Ok(Paginated::new(services, total, param))
    }

    async fn with_relations(
        &self,
        services: Vec<Service>,
    ) -> Result<Vec<ServiceWithRelations>, DbErr> {
        let refs = ReferenceRepository::new(self.db);
        let groups = refs
            .groups(unique_ids(services.iter().map(|s| Some(s.group_id))))
            .await?;
        let priorities = refs
            .priorities(unique_ids(services.iter().map(|s| s.priority_id)))
            .await?;

        Ok(services
            .into_iter()
            .map(|service| ServiceWithRelations {
                group: groups.get(&service.group_id).cloned(),
                priority: service.priority_id.and_then(|id| priorities.get(&id).cloned()),
                service,
            })
            .collect())
    }

    pub async fn update(&self, params: UpdateServiceParam) -> Result<Service, DbErr> {
        let service = entity::prelude::Service::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Service with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::service::ActiveModel = service.into();
        if let Some(jurisdiction_id) = params.jurisdiction_id {
            active_model.jurisdiction_id = ActiveValue::Set(Some(jurisdiction_id));
        }
        if let Some(group_id) = params.group_id {
            active_model.group_id = ActiveValue::Set(group_id);
        }
        if let Some(priority_id) = params.priority_id {
            active_model.priority_id = ActiveValue::Set(Some(priority_id));
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
        if let Some(is_external) = params.is_external {
            active_model.is_external = ActiveValue::Set(is_external);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Service::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Service::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn is_referenced(&self, id: i32) -> Result<bool, DbErr> {
        let requests = entity::prelude::ServiceRequest::find()
            .filter(entity::service_request::Column::ServiceId.eq(id))
            .count(self.db)
            .await?;

        Ok(requests > 0)
    }
}
