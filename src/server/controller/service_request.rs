use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::AppEvent,
        resource::{Action, Resource},
        service_request::{
            CreateServiceRequestDto, PaginatedServiceRequestsDto, ServiceRequestDto,
            UpdateServiceRequestDto,
        },
    },
    server::{
        controller::param::{PaginationParam, ReportFilterParam},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::service_request::{NewServiceRequest, ServiceRequest, UpdateServiceRequestParam},
        service::service_request::ServiceRequestService,
        state::AppState,
    },
};

/// Tag for grouping service request endpoints in OpenAPI documentation
pub static SERVICE_REQUEST_TAG: &str = "service request";

/// Log a service request taken by the signed in operator.
///
/// Group and jurisdiction default from the service, priority from the service or
/// the lowest-weight priority, status from the lowest-weight status. The request
/// code is generated from the service code, the year and a running number.
///
/// # Access Control
/// - `servicerequests:create`
///
/// # Arguments
/// - `state` - Application state containing the database connection and event bus
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Reporter, service and issue details
///
/// # Returns
/// - `201 Created` - Logged request with references resolved
/// - `400 Bad Request` - Missing reporter details, unknown references or no default available
/// - `403 Forbidden` - Missing token or permission
#[utoipa::path(
    post,
    path = "/servicerequests",
    tag = SERVICE_REQUEST_TAG,
    request_body = CreateServiceRequestDto,
    responses(
        (status = 201, description = "Successfully logged service request", body = ServiceRequestDto),
        (status = 400, description = "Invalid service request", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateServiceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let operator = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::ServiceRequests, Action::Create)])
        .await?;

    let service = ServiceRequestService::new(&state.db);
    let request = service
        .create(NewServiceRequest::from_dto(payload)?, Some(operator.id))
        .await?;

    state.events.service_request_changed(AppEvent::Created {
        resource: Resource::ServiceRequests,
        id: request.id,
    });

    Ok((StatusCode::CREATED, Json(to_dto(&service, request).await?)))
}

/// Get paginated service requests, newest first.
///
/// Accepts the report filter parameters in addition to `q`, which matches the code,
/// reporter name or phone and the description.
///
/// # Access Control
/// - Any authenticated party
#[utoipa::path(
    get,
    path = "/servicerequests",
    tag = SERVICE_REQUEST_TAG,
    params(PaginationParam, ReportFilterParam),
    responses(
        (status = 200, description = "Successfully retrieved service requests", body = PaginatedServiceRequestsDto),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(page): Query<PaginationParam>,
    Query(filter): Query<ReportFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = ServiceRequestService::new(&state.db);
    let requests = service
        .get_paginated(&page.into_page(), filter.into_filter()?)
        .await?;
    let refs = service.references(&requests.items).await?;

    Ok((StatusCode::OK, Json(requests.into_dto(&refs))))
}

#[utoipa::path(
    get,
    path = "/servicerequests/{id}",
    tag = SERVICE_REQUEST_TAG,
    params(("id" = i32, Path, description = "Service request ID")),
    responses(
        (status = 200, description = "Successfully retrieved service request", body = ServiceRequestDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Service request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_request_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = ServiceRequestService::new(&state.db);
    let Some(request) = service.get_by_id(id).await? else {
        return Err(AppError::NotFound("Service request not found".to_string()));
    };

    Ok((StatusCode::OK, Json(to_dto(&service, request).await?)))
}

/// Update a service request. Served for both PUT and PATCH.
///
/// `resolved: true` stamps the resolution time unless already resolved,
/// `resolved: false` reopens the request. Changing the service moves the request
/// into that service's group.
///
/// # Access Control
/// - `servicerequests:edit`
#[utoipa::path(
    put,
    path = "/servicerequests/{id}",
    tag = SERVICE_REQUEST_TAG,
    params(("id" = i32, Path, description = "Service request ID")),
    request_body = UpdateServiceRequestDto,
    responses(
        (status = 200, description = "Successfully updated service request", body = ServiceRequestDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Service request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServiceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::ServiceRequests, Action::Edit)])
        .await?;

    let service = ServiceRequestService::new(&state.db);
    let Some(request) = service
        .update(UpdateServiceRequestParam::from_dto(id, payload)?)
        .await?
    else {
        return Err(AppError::NotFound("Service request not found".to_string()));
    };

    state.events.service_request_changed(AppEvent::Updated {
        resource: Resource::ServiceRequests,
        id: request.id,
    });

    Ok((StatusCode::OK, Json(to_dto(&service, request).await?)))
}

/// Delete a service request together with its comments.
///
/// Connected clients receive the deletion followed by a reload of the request
/// lists and dashboards.
///
/// # Access Control
/// - `servicerequests:delete`
#[utoipa::path(
    delete,
    path = "/servicerequests/{id}",
    tag = SERVICE_REQUEST_TAG,
    params(("id" = i32, Path, description = "Service request ID")),
    responses(
        (status = 204, description = "Successfully deleted service request"),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Service request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::ServiceRequests, Action::Delete)])
        .await?;

    if !ServiceRequestService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Service request not found".to_string()));
    }

    state.events.service_request_changed(AppEvent::Deleted {
        resource: Resource::ServiceRequests,
        id,
    });

    Ok(StatusCode::NO_CONTENT)
}

async fn to_dto(
    service: &ServiceRequestService<'_>,
    request: ServiceRequest,
) -> Result<ServiceRequestDto, AppError> {
    let refs = service.references(std::slice::from_ref(&request)).await?;

    Ok(request.into_dto(&refs))
}
