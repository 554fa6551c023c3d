use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        permission::{
            CreatePermissionDto, PaginatedPermissionsDto, PermissionDto, UpdatePermissionDto,
        },
        resource::{Action, Resource},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::permission::CreatePermissionParam,
        service::permission::PermissionService,
        state::AppState,
    },
};

/// Tag for grouping permission endpoints in OpenAPI documentation
pub static PERMISSION_TAG: &str = "permission";

/// Create a permission. Its wildcard is `resource:action`.
///
/// # Access Control
/// - `permissions:create`
#[utoipa::path(
    post,
    path = "/permissions",
    tag = PERMISSION_TAG,
    request_body = CreatePermissionDto,
    responses(
        (status = 201, description = "Successfully created permission", body = PermissionDto),
        (status = 400, description = "Missing resource or action", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 409, description = "Wildcard already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_permission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePermissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Permissions, Action::Create)])
        .await?;

    let permission = PermissionService::new(&state.db)
        .create(CreatePermissionParam::from_dto(payload))
        .await?;

    state.events.created(Resource::Permissions, permission.id);

    Ok((StatusCode::CREATED, Json(permission.into_dto())))
}

#[utoipa::path(
    get,
    path = "/permissions",
    tag = PERMISSION_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved permissions", body = PaginatedPermissionsDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_permissions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let permissions = PermissionService::new(&state.db)
        .get_paginated(&params.into_page())
        .await?;

    Ok((StatusCode::OK, Json(permissions.into_dto())))
}

#[utoipa::path(
    get,
    path = "/permissions/{id}",
    tag = PERMISSION_TAG,
    params(("id" = i32, Path, description = "Permission ID")),
    responses(
        (status = 200, description = "Successfully retrieved permission", body = PermissionDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Permission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_permission_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match PermissionService::new(&state.db).get_by_id(id).await? {
        Some(permission) => Ok((StatusCode::OK, Json(permission.into_dto()))),
        None => Err(AppError::NotFound("Permission not found".to_string())),
    }
}

/// Update a permission's description. Served for both PUT and PATCH.
///
/// Resource and action are fixed once created since roles refer to the wildcard.
#[utoipa::path(
    put,
    path = "/permissions/{id}",
    tag = PERMISSION_TAG,
    params(("id" = i32, Path, description = "Permission ID")),
    request_body = UpdatePermissionDto,
    responses(
        (status = 200, description = "Successfully updated permission", body = PermissionDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Permission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_permission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePermissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Permissions, Action::Edit)])
        .await?;

    let Some(permission) = PermissionService::new(&state.db)
        .update(id, payload.description)
        .await?
    else {
        return Err(AppError::NotFound("Permission not found".to_string()));
    };

    state.events.updated(Resource::Permissions, permission.id);

    Ok((StatusCode::OK, Json(permission.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/permissions/{id}",
    tag = PERMISSION_TAG,
    params(("id" = i32, Path, description = "Permission ID")),
    responses(
        (status = 204, description = "Successfully deleted permission"),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Permission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_permission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Permissions, Action::Delete)])
        .await?;

    if !PermissionService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Permission not found".to_string()));
    }

    state.events.deleted(Resource::Permissions, id);

    Ok(StatusCode::NO_CONTENT)
}
