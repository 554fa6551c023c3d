use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        resource::{Action, Resource},
        service::{CreateServiceDto, PaginatedServicesDto, ServiceDto, UpdateServiceDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::service::{CreateServiceParam, UpdateServiceParam},
        service::service::ServiceService,
        state::AppState,
    },
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

/// Create a service under a group.
///
/// The service's priority becomes the default priority of requests logged against it.
///
/// # Access Control
/// - `services:create`
///
/// # Returns
/// - `201 Created` - Service with its group and priority resolved
/// - `400 Bad Request` - Unknown group or priority
/// - `409 Conflict` - Code or name already taken
#[utoipa::path(
    post,
    path = "/services",
    tag = SERVICE_TAG,
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Successfully created service", body = ServiceDto),
        (status = 400, description = "Unknown group or priority", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 409, description = "Code or name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Services, Action::Create)])
        .await?;

    let service = ServiceService::new(&state.db)
        .create(CreateServiceParam::from_dto(payload))
        .await?;

    state.events.created(Resource::Services, service.service.id);

    Ok((StatusCode::CREATED, Json(service.into_dto())))
}

#[utoipa::path(
    get,
    path = "/services",
    tag = SERVICE_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved services", body = PaginatedServicesDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let services = ServiceService::new(&state.db)
        .get_paginated(&params.into_page())
        .await?;

    Ok((StatusCode::OK, Json(services.into_dto())))
}

#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Successfully retrieved service", body = ServiceDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match ServiceService::new(&state.db).get_by_id(id).await? {
        Some(service) => Ok((StatusCode::OK, Json(service.into_dto()))),
        None => Err(AppError::NotFound("Service not found".to_string())),
    }
}

/// Update a service. Served for both PUT and PATCH.
///
/// Existing requests keep the group they were logged with.
///
/// # Access Control
/// - `services:edit`
#[utoipa::path(
    put,
    path = "/services/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Successfully updated service", body = ServiceDto),
        (status = 400, description = "Unknown group or priority", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 409, description = "Code or name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Services, Action::Edit)])
        .await?;

    let Some(service) = ServiceService::new(&state.db)
        .update(UpdateServiceParam::from_dto(id, payload))
        .await?
    else {
        return Err(AppError::NotFound("Service not found".to_string()));
    };

    state.events.updated(Resource::Services, service.service.id);

    Ok((StatusCode::OK, Json(service.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/services/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Successfully deleted service"),
        (status = 400, description = "Service has service requests", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Services, Action::Delete)])
        .await?;

    if !ServiceService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Service not found".to_string()));
    }

    state.events.deleted(Resource::Services, id);

    Ok(StatusCode::NO_CONTENT)
}
