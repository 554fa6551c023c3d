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
        setting::{CreateSettingDto, PaginatedSettingsDto, SettingDto, UpdateSettingDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::setting::{CreateSettingParam, UpdateSettingParam},
        service::setting::SettingService,
        state::AppState,
    },
};

/// Tag for grouping setting endpoints in OpenAPI documentation
pub static SETTING_TAG: &str = "setting";

/// Create a setting.
///
/// Keys are stored lowercase and must be unique.
///
/// # Access Control
/// - `settings:create`
#[utoipa::path(
    post,
    path = "/settings",
    tag = SETTING_TAG,
    request_body = CreateSettingDto,
    responses(
        (status = 201, description = "Successfully created setting", body = SettingDto),
        (status = 400, description = "Missing key", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 409, description = "Key already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_setting(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateSettingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Settings, Action::Create)])
        .await?;

    let setting = SettingService::new(&state.db)
        .create(CreateSettingParam::from_dto(payload))
        .await?;

    state.events.created(Resource::Settings, setting.id);

    Ok((StatusCode::CREATED, Json(setting.into_dto())))
}

#[utoipa::path(
    get,
    path = "/settings",
    tag = SETTING_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved settings", body = PaginatedSettingsDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let settings = SettingService::new(&state.db)
        .get_paginated(&params.into_page())
        .await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

#[utoipa::path(
    get,
    path = "/settings/{id}",
    tag = SETTING_TAG,
    params(("id" = i32, Path, description = "Setting ID")),
    responses(
        (status = 200, description = "Successfully retrieved setting", body = SettingDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_setting_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match SettingService::new(&state.db).get_by_id(id).await? {
        Some(setting) => Ok((StatusCode::OK, Json(setting.into_dto()))),
        None => Err(AppError::NotFound("Setting not found".to_string())),
    }
}

/// Look a setting up by its key, case insensitively.
#[utoipa::path(
    get,
    path = "/settings/key/{key}",
    tag = SETTING_TAG,
    params(("key" = String, Path, description = "Setting key")),
    responses(
        (status = 200, description = "Successfully retrieved setting", body = SettingDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_setting_by_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match SettingService::new(&state.db).get_by_key(&key).await? {
        Some(setting) => Ok((StatusCode::OK, Json(setting.into_dto()))),
        None => Err(AppError::NotFound(format!("Setting '{}' not found", key))),
    }
}

/// Update a setting's name, value or description. Served for both PUT and PATCH.
///
/// # Access Control
/// - `settings:edit`
#[utoipa::path(
    put,
    path = "/settings/{id}",
    tag = SETTING_TAG,
    params(("id" = i32, Path, description = "Setting ID")),
    request_body = UpdateSettingDto,
    responses(
        (status = 200, description = "Successfully updated setting", body = SettingDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_setting(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSettingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Settings, Action::Edit)])
        .await?;

    let Some(setting) = SettingService::new(&state.db)
        .update(UpdateSettingParam::from_dto(id, payload))
        .await?
    else {
        return Err(AppError::NotFound("Setting not found".to_string()));
    };

    state.events.updated(Resource::Settings, setting.id);

    Ok((StatusCode::OK, Json(setting.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/settings/{id}",
    tag = SETTING_TAG,
    params(("id" = i32, Path, description = "Setting ID")),
    responses(
        (status = 204, description = "Successfully deleted setting"),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_setting(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Settings, Action::Delete)])
        .await?;

    if !SettingService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Setting not found".to_string()));
    }

    state.events.deleted(Resource::Settings, id);

    Ok(StatusCode::NO_CONTENT)
}
