use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::{
        page::{PageParam, Paginated},
        service_request::{CreateServiceRequestParam, ServiceRequest, UpdateServiceRequestParam},
    },
};

/// Repository for service requests.
///
/// Unlike other repositories this one returns `AppError`, since rows are converted
/// into a domain model whose intake method must parse.
pub struct ServiceRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateServiceRequestParam,
    ) -> Result<ServiceRequest, AppError> {
        let now = Utc::now();
        let entity = entity::service_request::ActiveModel {
            code: ActiveValue::Set(params.code),
            jurisdiction_id: ActiveValue::Set(params.jurisdiction_id),
            group_id: ActiveValue::Set(params.group_id),
            service_id: ActiveValue::Set(params.service_id),
            priority_id: ActiveValue::Set(params.priority_id),
            status_id: ActiveValue::Set(params.status_id),
            reporter_name: ActiveValue::Set(params.reporter.name),
            reporter_phone: ActiveValue::Set(params.reporter.phone),
            reporter_email: ActiveValue::Set(params.reporter.email),
            reporter_account: ActiveValue::Set(params.reporter.account),
            description: ActiveValue::Set(params.description),
            address: ActiveValue::Set(params.address),
            method: ActiveValue::Set(params.method.as_str().to_string()),
            workspace: ActiveValue::Set(params.workspace),
            operator_id: ActiveValue::Set(params.operator_id),
            assignee_id: ActiveValue::Set(params.assignee_id),
            call_started_at: ActiveValue::Set(params.call_started_at),
            call_ended_at: ActiveValue::Set(params.call_ended_at),
            resolved_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ServiceRequest::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ServiceRequest>, AppError> {
        entity::prelude::ServiceRequest::find_by_id(id)
            .one(self.db)
            .await?
            .map(ServiceRequest::from_entity)
            .transpose()
    }

    /// Gets paginated requests matching `condition`, newest first
    ///
    /// Search text matches the code, reporter name and phone, and description.
    pub async fn get_paginated(
        &self,
        param: &PageParam,
        condition: Condition,
    ) -> Result<Paginated<ServiceRequest>, AppError> {
        let mut query = entity::prelude::ServiceRequest::find().filter(condition);
        if let Some(q) = &param.q {
            query = query.filter(
                Condition::any()
                    .add(entity::service_request::Column::Code.contains(q))
                    .add(entity::service_request::Column::ReporterName.contains(q))
                    .add(entity::service_request::Column::ReporterPhone.contains(q))
                    .add(entity::service_request::Column::Description.contains(q)),
            );
        }

        let paginator = query
            .order_by_desc(entity::service_request::Column::CreatedAt)
            .order_by_desc(entity::service_request::Column::Id)
            .paginate(self.db, param.limit);

        let total = paginator.num_items().await?;
        let requests = paginator
            .fetch_page(param.index())
            .await?
            .into_iter()
            .map(ServiceRequest::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated::new(requests, total, param))
    }

    /// Gets every request matching `condition`, oldest first
    pub async fn find_all(&self, condition: Condition) -> Result<Vec<ServiceRequest>, AppError> {
        entity::prelude::ServiceRequest::find()
            .filter(condition)
            .order_by_asc(entity::service_request::Column::CreatedAt)
            .order_by_asc(entity::service_request::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ServiceRequest::from_entity)
            .collect()
    }

    /// Gets the sequence number following the highest code of `service_id` starting with `prefix`
    ///
    /// Only codes of the same service are considered, since another service's code
    /// may itself begin with this prefix.
    pub async fn next_sequence(&self, service_id: i32, prefix: &str) -> Result<u64, DbErr> {
        let codes: Vec<String> = entity::prelude::ServiceRequest::find()
            .select_only()
            .column(entity::service_request::Column::Code)
            .filter(entity::service_request::Column::ServiceId.eq(service_id))
            .filter(entity::service_request::Column::Code.starts_with(prefix))
            .into_tuple()
            .all(self.db)
            .await?;

        let last_sequence = codes
            .iter()
            .filter_map(|code| code.get(prefix.len()..))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Ok(last_sequence + 1)
    }

    /// Applies the provided fields; `resolved` stamps or clears the resolution time
    pub async fn update(
        &self,
        params: UpdateServiceRequestParam,
    ) -> Result<ServiceRequest, AppError> {
        let request = entity::prelude::ServiceRequest::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Service request with id {} not found",
                params.id
            )))?;
        let already_resolved = request.resolved_at.is_some();

        let mut active_model: entity::service_request::ActiveModel = request.into();
        if let Some(service_id) = params.service_id {
            active_model.service_id = ActiveValue::Set(service_id);
        }
        if let Some(group_id) = params.group_id {
            active_model.group_id = ActiveValue::Set(Some(group_id));
        }
        if let Some(jurisdiction_id) = params.jurisdiction_id {
            active_model.jurisdiction_id = ActiveValue::Set(Some(jurisdiction_id));
        }
        if let Some(priority_id) = params.priority_id {
            active_model.priority_id = ActiveValue::Set(priority_id);
        }
        if let Some(status_id) = params.status_id {
            active_model.status_id = ActiveValue::Set(status_id);
        }
        if let Some(reporter) = params.reporter {
            active_model.reporter_name = ActiveValue::Set(reporter.name);
            active_model.reporter_phone = ActiveValue::Set(reporter.phone);
            active_model.reporter_email = ActiveValue::Set(reporter.email);
            active_model.reporter_account = ActiveValue::Set(reporter.account);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if params.address.is_some() {
            active_model.address = ActiveValue::Set(params.address);
        }
        if let Some(method) = params.method {
            active_model.method = ActiveValue::Set(method.as_str().to_string());
        }
        if params.workspace.is_some() {
            active_model.workspace = ActiveValue::Set(params.workspace);
        }
        if let Some(assignee_id) = params.assignee_id {
            active_model.assignee_id = ActiveValue::Set(Some(assignee_id));
        }
        if params.call_started_at.is_some() {
            active_model.call_started_at = ActiveValue::Set(params.call_started_at);
        }
        if params.call_ended_at.is_some() {
            active_model.call_ended_at = ActiveValue::Set(params.call_ended_at);
        }
        match params.resolved {
            Some(true) if !already_resolved => {
                active_model.resolved_at = ActiveValue::Set(Some(Utc::now()));
            }
            Some(false) => {
                active_model.resolved_at = ActiveValue::Set(None);
            }
            _ => {}
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        ServiceRequest::from_entity(entity)
    }

    /// Deletes a request together with its comments
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::ServiceRequestId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::ServiceRequest::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ServiceRequest::find()
            .filter(entity::service_request::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
