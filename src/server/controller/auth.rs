use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{
            ChangePasswordDto, ForgotDto, MessageDto, RecoverDto, SigninDto, SigninResponseDto,
            TokenDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn message(message: &str) -> Json<MessageDto> {
    Json(MessageDto {
        success: true,
        message: message.to_string(),
    })
}

/// Sign in with email and password.
///
/// Each wrong password counts towards the lockout threshold. The attempt reaching
/// it locks the account and the unlock token is logged.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - Party and bearer token
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Account not confirmed
/// - `423 Locked` - Account locked
#[utoipa::path(
    post,
    path = "/signin",
    tag = AUTH_TAG,
    request_body = SigninDto,
    responses(
        (status = 200, description = "Successfully signed in", body = SigninResponseDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Account not confirmed", body = ErrorDto),
        (status = 423, description = "Account locked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninDto>,
) -> Result<impl IntoResponse, AppError> {
    let (party, token) = AuthService::new(&state.db, &state.tokens, state.max_failed_attempts)
        .signin(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SigninResponseDto {
            success: true,
            party: party.into_dto(),
            token,
        }),
    ))
}

/// Request a password recovery token.
///
/// Always succeeds so the response does not reveal whether the email is registered.
#[utoipa::path(
    post,
    path = "/forgot",
    tag = AUTH_TAG,
    request_body = ForgotDto,
    responses(
        (status = 200, description = "Recovery requested", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot(
    State(state): State<AppState>,
    Json(payload): Json<ForgotDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.tokens, state.max_failed_attempts)
        .forgot(&payload.email)
        .await?;

    Ok((
        StatusCode::OK,
        message("If the email is registered, recovery instructions have been sent"),
    ))
}

#[utoipa::path(
    post,
    path = "/recover",
    tag = AUTH_TAG,
    request_body = RecoverDto,
    responses(
        (status = 200, description = "Password reset", body = MessageDto),
        (status = 400, description = "Unknown token or password too short", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recover(
    State(state): State<AppState>,
    Json(payload): Json<RecoverDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.tokens, state.max_failed_attempts)
        .recover(&payload.token, &payload.password)
        .await?;

    Ok((StatusCode::OK, message("Password changed, you can now sign in")))
}

#[utoipa::path(
    post,
    path = "/confirm",
    tag = AUTH_TAG,
    request_body = TokenDto,
    responses(
        (status = 200, description = "Account confirmed", body = MessageDto),
        (status = 400, description = "Unknown token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm(
    State(state): State<AppState>,
    Json(payload): Json<TokenDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.tokens, state.max_failed_attempts)
        .confirm(&payload.token)
        .await?;

    Ok((StatusCode::OK, message("Account confirmed")))
}

#[utoipa::path(
    post,
    path = "/unlock",
    tag = AUTH_TAG,
    request_body = TokenDto,
    responses(
        (status = 200, description = "Account unlocked", body = MessageDto),
        (status = 400, description = "Unknown token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlock(
    State(state): State<AppState>,
    Json(payload): Json<TokenDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.tokens, state.max_failed_attempts)
        .unlock(&payload.token)
        .await?;

    Ok((StatusCode::OK, message("Account unlocked")))
}

/// Change the signed in party's password.
///
/// # Access Control
/// - Any authenticated party, for its own account
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - New password too short
/// - `401 Unauthorized` - Current password wrong
/// - `403 Forbidden` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/change",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "New password too short", body = ErrorDto),
        (status = 401, description = "Current password wrong", body = ErrorDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let party = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    AuthService::new(&state.db, &state.tokens, state.max_failed_attempts)
        .change(party.id, &payload.password, &payload.new_password)
        .await?;

    Ok((StatusCode::OK, message("Password changed")))
}
