use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        status::{CreateStatusDto, PaginatedStatusesDto, StatusDto, UpdateStatusDto},
        resource::{Action, Resource},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::status::{CreateStatusParam, UpdateStatusParam},
        service::status::StatusService,
        state::AppState,
    },
};

/// Tag for grouping status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

/// Create a new status.
///
/// # Access Control
/// - `statuses:create`
///
/// # Returns
/// - `201 Created` - Successfully created status
/// - `403 Forbidden` - Missing token or permission
/// - `409 Conflict` - Name already taken
#[utoipa::path(
    post,
    path = "/statuses",
    tag = STATUS_TAG,
    request_body = CreateStatusDto,
    responses(
        (status = 201, description = "Successfully created status", body = StatusDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Statuses, Action::Create)])
        .await?;

    let status = StatusService::new(&state.db)
        .create(CreateStatusParam::from_dto(payload))
        .await?;

    state.events.created(Resource::Statuses, status.id);

    Ok((StatusCode::CREATED, Json(status.into_dto())))
}

/// Get paginated statuses ordered by weight.
///
/// # Access Control
/// - Any authenticated party
///
/// # Returns
/// - `200 OK` - Page of statuses
/// - `403 Forbidden` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/statuses",
    tag = STATUS_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved statuses", body = PaginatedStatusesDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_statuses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let statuses = StatusService::new(&state.db)
        .get_paginated(&params.into_page())
        .await?;

    Ok((StatusCode::OK, Json(statuses.into_dto())))
}

/// Get the status new requests start in.
///
/// # Returns
/// - `200 OK` - Lowest-weight status
/// - `404 Not Found` - No statuses configured
#[utoipa::path(
    get,
    path = "/statuses/default",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Default status", body = StatusDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No statuses configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_default_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match StatusService::new(&state.db).get_default().await? {
        Some(status) => Ok((StatusCode::OK, Json(status.into_dto()))),
        None => Err(AppError::NotFound("No statuses configured".to_string())),
    }
}

#[utoipa::path(
    get,
    path = "/statuses/{id}",
    tag = STATUS_TAG,
    params(("id" = i32, Path, description = "Status ID")),
    responses(
        (status = 200, description = "Successfully retrieved status", body = StatusDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match StatusService::new(&state.db).get_by_id(id).await? {
        Some(status) => Ok((StatusCode::OK, Json(status.into_dto()))),
        None => Err(AppError::NotFound("Status not found".to_string())),
    }
}

/// Update a status. Served for both PUT and PATCH.
///
/// # Access Control
/// - `statuses:edit`
///
/// # Returns
/// - `200 OK` - Updated status
/// - `404 Not Found` - Status not found
/// - `409 Conflict` - Name taken by another status
#[utoipa::path(
    put,
    path = "/statuses/{id}",
    tag = STATUS_TAG,
    params(("id" = i32, Path, description = "Status ID")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Successfully updated status", body = StatusDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Statuses, Action::Edit)])
        .await?;

    let Some(status) = StatusService::new(&state.db)
        .update(UpdateStatusParam::from_dto(id, payload))
        .await?
    else {
        return Err(AppError::NotFound("Status not found".to_string()));
    };

    state.events.updated(Resource::Statuses, status.id);

    Ok((StatusCode::OK, Json(status.into_dto())))
}

/// Delete a status.
///
/// # Access Control
/// - `statuses:delete`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `400 Bad Request` - Status is used by requests
/// - `404 Not Found` - Status not found
#[utoipa::path(
    delete,
    path = "/statuses/{id}",
    tag = STATUS_TAG,
    params(("id" = i32, Path, description = "Status ID")),
    responses(
        (status = 204, description = "Successfully deleted status"),
        (status = 400, description = "Status is still referenced", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Statuses, Action::Delete)])
        .await?;

    if !StatusService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Status not found".to_string()));
    }

    state.events.deleted(Resource::Statuses, id);

    Ok(StatusCode::NO_CONTENT)
}
