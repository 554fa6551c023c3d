use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected request.
    #[error("Request is missing an authorization token")]
    MissingToken,

    /// Token signature or structure is invalid.
    #[error("Authorization token is invalid: {0}")]
    InvalidToken(String),

    /// Token `exp` claim is in the past.
    #[error("Authorization token has expired")]
    ExpiredToken,

    /// Token refers to a party that no longer exists.
    #[error("Party {0} referenced by token not found in database")]
    PartyNotFound(i32),

    /// Email/password pair did not match.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Account locked after too many failed signins.
    #[error("Party {0} account is locked")]
    AccountLocked(i32),

    /// Account has not been confirmed yet.
    #[error("Party {0} account is not confirmed")]
    AccountNotConfirmed(i32),

    /// Party lacks a permission required by the endpoint.
    ///
    /// # Fields
    /// - Party ID
    /// - Missing permission wildcard
    #[error("Party {0} denied access, missing permission {1}")]
    AccessDenied(i32, String),

    /// Recovery, confirmation or unlock token did not match any party.
    #[error("Token is invalid or has already been used")]
    UnknownToken,
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems and permission failures answer 403 Forbidden so clients redirect
/// to the signin screen. Bad credentials answer 401, locked accounts 423.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::PartyNotFound(_) => {
                (StatusCode::FORBIDDEN, "Authorization required")
            }
            Self::ExpiredToken => (StatusCode::FORBIDDEN, "Session expired, please sign in again"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccountLocked(_) => (StatusCode::LOCKED, "Account is locked"),
            Self::AccountNotConfirmed(_) => (StatusCode::FORBIDDEN, "Account is not confirmed"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::UnknownToken => (StatusCode::BAD_REQUEST, "Token is invalid or expired"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
