//! Service request intake and updates.
//!
//! Creating a request fills in whatever the operator left out: group and jurisdiction
//! come from the service, priority from the service or the lowest-weight priority,
//! status from the lowest-weight status. The request code is derived from the service
//! code, the year and a running sequence.

use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        jurisdiction::JurisdictionRepository, priority::PriorityRepository,
        reference::ReferenceRepository, service::ServiceRepository,
        service_request::ServiceRequestRepository, status::StatusRepository,
    },
    error::AppError,
    model::{
        page::{PageParam, Paginated},
        report::{prepare_query, ReportFilter},
        service_request::{
            code_prefix, generate_code, CreateServiceRequestParam, NewServiceRequest,
            References, ServiceRequest, UpdateServiceRequestParam,
        },
    },
};

pub struct ServiceRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a new request on behalf of `operator_id`
    ///
    /// # Returns
    /// - `Ok(ServiceRequest)` - Stored request with its generated code
    /// - `Err(AppError::BadRequest)` - Missing reporter details, unknown service,
    ///   priority or status, or no default available
    pub async fn create(
        &self,
        new: NewServiceRequest,
        operator_id: Option<i32>,
    ) -> Result<ServiceRequest, AppError> {
        if new.reporter.name.is_empty() || new.reporter.phone.is_empty() {
            return Err(AppError::BadRequest(
                "Reporter name and phone are required".to_string(),
            ));
        }
        if new.description.is_empty() {
            return Err(AppError::BadRequest("Description is required".to_string()));
        }

        let Some(service) = ServiceRepository::new(self.db)
            .find_by_id(new.service_id)
            .await?
        else {
            return Err(AppError::BadRequest(format!(
                "Service {} not found",
                new.service_id
            )));
        };

        let jurisdiction_id = match new.jurisdiction_id {
            Some(id) => Some(self.ensure_jurisdiction(id).await?),
            None => service.jurisdiction_id,
        };
        let priority_id = self
            .resolve_priority(new.priority_id.or(service.priority_id))
            .await?;
        let status_id = self.resolve_status(new.status_id).await?;

        let repo = ServiceRequestRepository::new(self.db);

        let now = Utc::now();
        let sequence = repo
            .next_sequence(service.id, &code_prefix(&service.code, now))
            .await?;
        let code = generate_code(&service.code, now.year(), sequence);

        let request = repo
            .create(CreateServiceRequestParam {
                code,
                jurisdiction_id,
                group_id: Some(service.group_id),
                service_id: service.id,
                priority_id,
                status_id,
                reporter: new.reporter,
                description: new.description,
                address: new.address,
                method: new.method,
                workspace: new.workspace,
                operator_id,
                assignee_id: new.assignee_id,
                call_started_at: new.call_started_at,
                call_ended_at: new.call_ended_at,
            })
            .await?;

        tracing::info!("Service request {} logged", request.code);

        Ok(request)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ServiceRequest>, AppError> {
        ServiceRequestRepository::new(self.db).find_by_id(id).await
    }

    /// Lists requests matching the report filter, newest first
    pub async fn get_paginated(
        &self,
        param: &PageParam,
        filter: ReportFilter,
    ) -> Result<Paginated<ServiceRequest>, AppError> {
        let condition = prepare_query(filter, Utc::now()).into_condition();

        ServiceRequestRepository::new(self.db)
            .get_paginated(param, condition)
            .await
    }

    /// Names and colors of everything the requests point at
    pub async fn references(&self, requests: &[ServiceRequest]) -> Result<References, AppError> {
        Ok(ReferenceRepository::new(self.db)
            .for_requests(requests)
            .await?)
    }

    /// Applies a partial update
    ///
    /// Moving a request to another service moves it to that service's group.
    /// Returns None if the request doesn't exist.
    pub async fn update(
        &self,
        mut params: UpdateServiceRequestParam,
    ) -> Result<Option<ServiceRequest>, AppError> {
        let repo = ServiceRequestRepository::new(self.db);

        if !repo.exists(params.id).await? {
            return Ok(None);
        }

        if let Some(service_id) = params.service_id {
            let Some(service) = ServiceRepository::new(self.db)
                .find_by_id(service_id)
                .await?
            else {
                return Err(AppError::BadRequest(format!(
                    "Service {} not found",
                    service_id
                )));
            };
            params.group_id = Some(service.group_id);
        }
        if let Some(id) = params.jurisdiction_id {
            self.ensure_jurisdiction(id).await?;
        }
        if let Some(id) = params.priority_id {
            self.resolve_priority(Some(id)).await?;
        }
        if let Some(id) = params.status_id {
            self.resolve_status(Some(id)).await?;
        }
        if let Some(reporter) = &params.reporter {
            if reporter.name.is_empty() || reporter.phone.is_empty() {
                return Err(AppError::BadRequest(
                    "Reporter name and phone are required".to_string(),
                ));
            }
        }

        Ok(Some(repo.update(params).await?))
    }

    /// Deletes a request and its comments
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ServiceRequestRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    async fn ensure_jurisdiction(&self, id: i32) -> Result<i32, AppError> {
        match JurisdictionRepository::new(self.db).find_by_id(id).await? {
            Some(jurisdiction) => Ok(jurisdiction.id),
            None => Err(AppError::BadRequest(format!("Jurisdiction {} not found", id))),
        }
    }

    /// Checks a requested priority or falls back to the default one
    async fn resolve_priority(&self, requested: Option<i32>) -> Result<i32, AppError> {
        let repo = PriorityRepository::new(self.db);

        let priority = match requested {
            Some(id) => repo.find_by_id(id).await?.ok_or_else(|| {
                AppError::BadRequest(format!("Priority {} not found", id))
            })?,
            None => repo.find_default().await?.ok_or_else(|| {
                AppError::BadRequest("No priority available for the request".to_string())
            })?,
        };

        Ok(priority.id)
    }

    async fn resolve_status(&self, requested: Option<i32>) -> Result<i32, AppError> {
        let repo = StatusRepository::new(self.db);

        let status = match requested {
            Some(id) => repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::BadRequest(format!("Status {} not found", id)))?,
            None => repo.find_default().await?.ok_or_else(|| {
                AppError::BadRequest("No status available for the request".to_string())
            })?,
        };

        Ok(status.id)
    }
}
