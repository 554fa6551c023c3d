use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        jurisdiction::{
            CreateJurisdictionDto, JurisdictionDto, PaginatedJurisdictionsDto,
            UpdateJurisdictionDto,
        },
        resource::{Action, Resource},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::jurisdiction::{CreateJurisdictionParam, UpdateJurisdictionParam},
        service::jurisdiction::JurisdictionService,
        state::AppState,
    },
};

/// Tag for grouping jurisdiction endpoints in OpenAPI documentation
pub static JURISDICTION_TAG: &str = "jurisdiction";

/// Create a jurisdiction, optionally nested under a parent.
///
/// # Access Control
/// - `jurisdictions:create`
///
/// # Returns
/// - `201 Created` - Successfully created jurisdiction
/// - `400 Bad Request` - Unknown parent
/// - `409 Conflict` - Code or name already taken
#[utoipa::path(
    post,
    path = "/jurisdictions",
    tag = JURISDICTION_TAG,
    request_body = CreateJurisdictionDto,
    responses(
        (status = 201, description = "Successfully created jurisdiction", body = JurisdictionDto),
        (status = 400, description = "Unknown parent", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 409, description = "Code or name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_jurisdiction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateJurisdictionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Jurisdictions, Action::Create)])
        .await?;

    let jurisdiction = JurisdictionService::new(&state.db)
        .create(CreateJurisdictionParam::from_dto(payload))
        .await?;

    state
        .events
        .created(Resource::Jurisdictions, jurisdiction.id);

    Ok((StatusCode::CREATED, Json(jurisdiction.into_dto())))
}

#[utoipa::path(
    get,
    path = "/jurisdictions",
    tag = JURISDICTION_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved jurisdictions", body = PaginatedJurisdictionsDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_jurisdictions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let jurisdictions = JurisdictionService::new(&state.db)
        .get_paginated(&params.into_page())
        .await?;

    Ok((StatusCode::OK, Json(jurisdictions.into_dto())))
}

#[utoipa::path(
    get,
    path = "/jurisdictions/{id}",
    tag = JURISDICTION_TAG,
    params(("id" = i32, Path, description = "Jurisdiction ID")),
    responses(
        (status = 200, description = "Successfully retrieved jurisdiction", body = JurisdictionDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Jurisdiction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_jurisdiction_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match JurisdictionService::new(&state.db).get_by_id(id).await? {
        Some(jurisdiction) => Ok((StatusCode::OK, Json(jurisdiction.into_dto()))),
        None => Err(AppError::NotFound("Jurisdiction not found".to_string())),
    }
}

/// Update a jurisdiction. Served for both PUT and PATCH.
///
/// # Access Control
/// - `jurisdictions:edit`
#[utoipa::path(
    put,
    path = "/jurisdictions/{id}",
    tag = JURISDICTION_TAG,
    params(("id" = i32, Path, description = "Jurisdiction ID")),
    request_body = UpdateJurisdictionDto,
    responses(
        (status = 200, description = "Successfully updated jurisdiction", body = JurisdictionDto),
        (status = 400, description = "Unknown parent or self as parent", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Jurisdiction not found", body = ErrorDto),
        (status = 409, description = "Code or name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_jurisdiction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateJurisdictionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Jurisdictions, Action::Edit)])
        .await?;

    let Some(jurisdiction) = JurisdictionService::new(&state.db)
        .update(UpdateJurisdictionParam::from_dto(id, payload))
        .await?
    else {
        return Err(AppError::NotFound("Jurisdiction not found".to_string()));
    };

    state
        .events
        .updated(Resource::Jurisdictions, jurisdiction.id);

    Ok((StatusCode::OK, Json(jurisdiction.into_dto())))
}

/// Delete a jurisdiction.
///
/// # Access Control
/// - `jurisdictions:delete`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `400 Bad Request` - Still referenced by children, catalog entries, parties or requests
/// - `404 Not Found` - Jurisdiction not found
#[utoipa::path(
    delete,
    path = "/jurisdictions/{id}",
    tag = JURISDICTION_TAG,
    params(("id" = i32, Path, description = "Jurisdiction ID")),
    responses(
        (status = 204, description = "Successfully deleted jurisdiction"),
        (status = 400, description = "Jurisdiction is still referenced", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Jurisdiction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_jurisdiction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Jurisdictions, Action::Delete)])
        .await?;

    if !JurisdictionService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Jurisdiction not found".to_string()));
    }

    state.events.deleted(Resource::Jurisdictions, id);

    Ok(StatusCode::NO_CONTENT)
}
