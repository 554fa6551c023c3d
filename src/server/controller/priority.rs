use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        priority::{CreatePriorityDto, PaginatedPrioritiesDto, PriorityDto, UpdatePriorityDto},
        resource::{Action, Resource},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::priority::{CreatePriorityParam, UpdatePriorityParam},
        service::priority::PriorityService,
        state::AppState,
    },
};

/// Tag for grouping priority endpoints in OpenAPI documentation
pub static PRIORITY_TAG: &str = "priority";

/// Create a new priority.
///
/// A priority saved without a color is given a random one.
///
/// # Access Control
/// - `priorities:create`
///
/// # Returns
/// - `201 Created` - Successfully created priority
/// - `403 Forbidden` - Missing token or permission
/// - `409 Conflict` - Name already taken
#[utoipa::path(
    post,
    path = "/priorities",
    tag = PRIORITY_TAG,
    request_body = CreatePriorityDto,
    responses(
        (status = 201, description = "Successfully created priority", body = PriorityDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_priority(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePriorityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Priorities, Action::Create)])
        .await?;

    let priority = PriorityService::new(&state.db)
        .create(CreatePriorityParam::from_dto(payload))
        .await?;

    state.events.created(Resource::Priorities, priority.id);

    Ok((StatusCode::CREATED, Json(priority.into_dto())))
}

/// Get paginated priorities ordered by weight.
///
/// # Access Control
/// - Any authenticated party
///
/// # Returns
/// - `200 OK` - Page of priorities
/// - `403 Forbidden` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/priorities",
    tag = PRIORITY_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved priorities", body = PaginatedPrioritiesDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_priorities(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let priorities = PriorityService::new(&state.db)
        .get_paginated(&params.into_page())
        .await?;

    Ok((StatusCode::OK, Json(priorities.into_dto())))
}

/// Get the priority new requests receive when none is given.
///
/// # Returns
/// - `200 OK` - Lowest-weight priority
/// - `404 Not Found` - No priorities configured
#[utoipa::path(
    get,
    path = "/priorities/default",
    tag = PRIORITY_TAG,
    responses(
        (status = 200, description = "Default priority", body = PriorityDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "No priorities configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_default_priority(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match PriorityService::new(&state.db).get_default().await? {
        Some(priority) => Ok((StatusCode::OK, Json(priority.into_dto()))),
        None => Err(AppError::NotFound("No priorities configured".to_string())),
    }
}

#[utoipa::path(
    get,
    path = "/priorities/{id}",
    tag = PRIORITY_TAG,
    params(("id" = i32, Path, description = "Priority ID")),
    responses(
        (status = 200, description = "Successfully retrieved priority", body = PriorityDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Priority not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_priority_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match PriorityService::new(&state.db).get_by_id(id).await? {
        Some(priority) => Ok((StatusCode::OK, Json(priority.into_dto()))),
        None => Err(AppError::NotFound("Priority not found".to_string())),
    }
}

/// Update a priority.
///
/// Only fields present in the body change. Served for both PUT and PATCH.
///
/// # Access Control
/// - `priorities:edit`
///
/// # Returns
/// - `200 OK` - Updated priority
/// - `404 Not Found` - Priority not found
/// - `409 Conflict` - Name taken by another priority
#[utoipa::path(
    put,
    path = "/priorities/{id}",
    tag = PRIORITY_TAG,
    params(("id" = i32, Path, description = "Priority ID")),
    request_body = UpdatePriorityDto,
    responses(
        (status = 200, description = "Successfully updated priority", body = PriorityDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Priority not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_priority(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePriorityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Priorities, Action::Edit)])
        .await?;

    let Some(priority) = PriorityService::new(&state.db)
        .update(UpdatePriorityParam::from_dto(id, payload))
        .await?
    else {
        return Err(AppError::NotFound("Priority not found".to_string()));
    };

    state.events.updated(Resource::Priorities, priority.id);

    Ok((StatusCode::OK, Json(priority.into_dto())))
}

/// Delete a priority.
///
/// # Access Control
/// - `priorities:delete`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `400 Bad Request` - Priority is used by services or requests
/// - `404 Not Found` - Priority not found
#[utoipa::path(
    delete,
    path = "/priorities/{id}",
    tag = PRIORITY_TAG,
    params(("id" = i32, Path, description = "Priority ID")),
    responses(
        (status = 204, description = "Successfully deleted priority"),
        (status = 400, description = "Priority is still referenced", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Priority not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_priority(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Priorities, Action::Delete)])
        .await?;

    if !PriorityService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Priority not found".to_string()));
    }

    state.events.deleted(Resource::Priorities, id);

    Ok(StatusCode::NO_CONTENT)
}
