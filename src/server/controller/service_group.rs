use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        service_group::{
            CreateServiceGroupDto, PaginatedServiceGroupsDto, ServiceGroupDto,
            UpdateServiceGroupDto,
        },
        resource::{Action, Resource},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::service_group::{CreateServiceGroupParam, UpdateServiceGroupParam},
        service::service_group::ServiceGroupService,
        state::AppState,
    },
};

/// Tag for grouping service group endpoints in OpenAPI documentation
pub static SERVICE_GROUP_TAG: &str = "service group";

/// Create a service group.
///
/// # Access Control
/// - `servicegroups:create`
///
/// # Returns
/// - `201 Created` - Successfully created service group
/// - `409 Conflict` - Code or name already taken
#[utoipa::path(
    post,
    path = "/servicegroups",
    tag = SERVICE_GROUP_TAG,
    request_body = CreateServiceGroupDto,
    responses(
        (status = 201, description = "Successfully created service group", body = ServiceGroupDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 409, description = "Code or name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateServiceGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::ServiceGroups, Action::Create)])
        .await?;

    let service_group = ServiceGroupService::new(&state.db)
        .create(CreateServiceGroupParam::from_dto(payload))
        .await?;

    state
        .events
        .created(Resource::ServiceGroups, service_group.id);

    Ok((StatusCode::CREATED, Json(service_group.into_dto())))
}

#[utoipa::path(
    get,
    path = "/servicegroups",
    tag = SERVICE_GROUP_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved service groups", body = PaginatedServiceGroupsDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let groups = ServiceGroupService::new(&state.db)
        .get_paginated(&params.into_page())
        .await?;

    Ok((StatusCode::OK, Json(groups.into_dto())))
}

#[utoipa::path(
    get,
    path = "/servicegroups/{id}",
    tag = SERVICE_GROUP_TAG,
    params(("id" = i32, Path, description = "Service group ID")),
    responses(
        (status = 200, description = "Successfully retrieved service group", body = ServiceGroupDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Service group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_group_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match ServiceGroupService::new(&state.db).get_by_id(id).await? {
        Some(group) => Ok((StatusCode::OK, Json(group.into_dto()))),
        None => Err(AppError::NotFound("Service group not found".to_string())),
    }
}

/// Update a service group. Served for both PUT and PATCH.
///
/// # Access Control
/// - `servicegroups:edit`
#[utoipa::path(
    put,
    path = "/servicegroups/{id}",
    tag = SERVICE_GROUP_TAG,
    params(("id" = i32, Path, description = "Service group ID")),
    request_body = UpdateServiceGroupDto,
    responses(
        (status = 200, description = "Successfully updated service group", body = ServiceGroupDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Service group not found", body = ErrorDto),
        (status = 409, description = "Code or name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServiceGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::ServiceGroups, Action::Edit)])
        .await?;

    let Some(service_group) = ServiceGroupService::new(&state.db)
        .update(UpdateServiceGroupParam::from_dto(id, payload))
        .await?
    else {
        return Err(AppError::NotFound("Service group not found".to_string()));
    };

    state
        .events
        .updated(Resource::ServiceGroups, service_group.id);

    Ok((StatusCode::OK, Json(service_group.into_dto())))
}

/// Delete a service group.
///
/// # Access Control
/// - `servicegroups:delete`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `400 Bad Request` - Still referenced by services or requests
/// - `404 Not Found` - Service group not found
#[utoipa::path(
    delete,
    path = "/servicegroups/{id}",
    tag = SERVICE_GROUP_TAG,
    params(("id" = i32, Path, description = "Service group ID")),
    responses(
        (status = 204, description = "Successfully deleted service group"),
        (status = 400, description = "Service group is still referenced", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Service group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::ServiceGroups, Action::Delete)])
        .await?;

    if !ServiceGroupService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Service group not found".to_string()));
    }

    state.events.deleted(Resource::ServiceGroups, id);

    Ok(StatusCode::NO_CONTENT)
}
