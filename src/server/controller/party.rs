use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        party::{CreatePartyDto, PaginatedPartiesDto, PartyDto, UpdatePartyDto},
        resource::{Action, Resource},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::party::UpdatePartyParam,
        service::party::PartyService,
        state::AppState,
    },
};

/// Tag for grouping party endpoints in OpenAPI documentation
pub static PARTY_TAG: &str = "party";

/// Create a party account.
///
/// The password is hashed before storage and never returned. The account must be
/// confirmed with the logged confirmation token before it can sign in.
///
/// # Access Control
/// - `parties:create`
///
/// # Returns
/// - `201 Created` - Created party
/// - `400 Bad Request` - Password too short or unknown role
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/parties",
    tag = PARTY_TAG,
    request_body = CreatePartyDto,
    responses(
        (status = 201, description = "Successfully created party", body = PartyDto),
        (status = 400, description = "Password too short or unknown role", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_party(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePartyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Parties, Action::Create)])
        .await?;

    let party = PartyService::new(&state.db).create(payload).await?;

    state.events.created(Resource::Parties, party.id);

    Ok((StatusCode::CREATED, Json(party.into_dto())))
}

#[utoipa::path(
    get,
    path = "/parties",
    tag = PARTY_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved parties", body = PaginatedPartiesDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parties(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let parties = PartyService::new(&state.db)
        .get_paginated(&params.into_page())
        .await?;

    Ok((StatusCode::OK, Json(parties.into_dto())))
}

#[utoipa::path(
    get,
    path = "/parties/{id}",
    tag = PARTY_TAG,
    params(("id" = i32, Path, description = "Party ID")),
    responses(
        (status = 200, description = "Successfully retrieved party", body = PartyDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Party not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_party_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match PartyService::new(&state.db).get_by_id(id).await? {
        Some(party) => Ok((StatusCode::OK, Json(party.into_dto()))),
        None => Err(AppError::NotFound("Party not found".to_string())),
    }
}

/// Update a party's profile, role or jurisdiction. Served for both PUT and PATCH.
///
/// Passwords change through `/change` and `/recover` only.
///
/// # Access Control
/// - `parties:edit`
#[utoipa::path(
    put,
    path = "/parties/{id}",
    tag = PARTY_TAG,
    params(("id" = i32, Path, description = "Party ID")),
    request_body = UpdatePartyDto,
    responses(
        (status = 200, description = "Successfully updated party", body = PartyDto),
        (status = 400, description = "Unknown role", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Party not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_party(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePartyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Parties, Action::Edit)])
        .await?;

    let Some(party) = PartyService::new(&state.db)
        .update(UpdatePartyParam::from_dto(id, payload))
        .await?
    else {
        return Err(AppError::NotFound("Party not found".to_string()));
    };

    state.events.updated(Resource::Parties, party.id);

    Ok((StatusCode::OK, Json(party.into_dto())))
}

/// Delete another party's account.
///
/// # Access Control
/// - `parties:delete`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `400 Bad Request` - Attempt to delete the signed in party
/// - `404 Not Found` - Party not found
#[utoipa::path(
    delete,
    path = "/parties/{id}",
    tag = PARTY_TAG,
    params(("id" = i32, Path, description = "Party ID")),
    responses(
        (status = 204, description = "Successfully deleted party"),
        (status = 400, description = "Cannot delete own account", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Party not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_party(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Parties, Action::Delete)])
        .await?;

    if !PartyService::new(&state.db).delete(id, current.id).await? {
        return Err(AppError::NotFound("Party not found".to_string()));
    }

    state.events.deleted(Resource::Parties, id);

    Ok(StatusCode::NO_CONTENT)
}
