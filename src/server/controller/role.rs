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
        role::{CreateRoleDto, PaginatedRolesDto, RoleDto, UpdateRoleDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::role::{CreateRoleParam, UpdateRoleParam},
        service::role::RoleService,
        state::AppState,
    },
};

/// Tag for grouping role endpoints in OpenAPI documentation
pub static ROLE_TAG: &str = "role";

/// Create a role granting the listed permission ids.
///
/// # Access Control
/// - `roles:create`
///
/// # Returns
/// - `201 Created` - Role with its permission wildcards
/// - `400 Bad Request` - Unknown permission id
/// - `409 Conflict` - Name already taken
#[utoipa::path(
    post,
    path = "/roles",
    tag = ROLE_TAG,
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Successfully created role", body = RoleDto),
        (status = 400, description = "Unknown permission", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Roles, Action::Create)])
        .await?;

    let role = RoleService::new(&state.db)
        .create(CreateRoleParam::from_dto(payload))
        .await?;

    state.events.created(Resource::Roles, role.id);

    Ok((StatusCode::CREATED, Json(role.into_dto())))
}

#[utoipa::path(
    get,
    path = "/roles",
    tag = ROLE_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved roles", body = PaginatedRolesDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let roles = RoleService::new(&state.db)
        .get_paginated(&params.into_page())
        .await?;

    Ok((StatusCode::OK, Json(roles.into_dto())))
}

#[utoipa::path(
    get,
    path = "/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Successfully retrieved role", body = RoleDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_role_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match RoleService::new(&state.db).get_by_id(id).await? {
        Some(role) => Ok((StatusCode::OK, Json(role.into_dto()))),
        None => Err(AppError::NotFound("Role not found".to_string())),
    }
}

/// Update a role. Served for both PUT and PATCH.
///
/// A `permissions` list replaces the role's grants; leaving it out keeps them.
///
/// # Access Control
/// - `roles:edit`
#[utoipa::path(
    put,
    path = "/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Successfully updated role", body = RoleDto),
        (status = 400, description = "Unknown permission", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Roles, Action::Edit)])
        .await?;

    let Some(role) = RoleService::new(&state.db)
        .update(UpdateRoleParam::from_dto(id, payload))
        .await?
    else {
        return Err(AppError::NotFound("Role not found".to_string()));
    };

    state.events.updated(Resource::Roles, role.id);

    Ok((StatusCode::OK, Json(role.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 204, description = "Successfully deleted role"),
        (status = 400, description = "Role is assigned to parties", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Roles, Action::Delete)])
        .await?;

    if !RoleService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Role not found".to_string()));
    }

    state.events.deleted(Resource::Roles, id);

    Ok(StatusCode::NO_CONTENT)
}
