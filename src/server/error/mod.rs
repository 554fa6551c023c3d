//! Application errors and their HTTP responses.
//!
//! [`AppError`] is the single error type handlers return; its `IntoResponse`
//! implementation decides which failures a client may see.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Error returned by every service and controller.
///
/// Library errors convert through `#[from]` so `?` works across layers. The
/// message-carrying variants are the ones a client is allowed to read.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed environment variable at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Token, credential or permission failure with its own status mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Query failure from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Unexpected internal state such as malformed stored values.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Password hashing failure.
    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    /// Token signing failure. Verification failures are mapped to `AuthError`.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// CSV export serialization failure.
    #[error(transparent)]
    CsvErr(#[from] csv::Error),

    /// Server socket failure while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the given message. Used for validation failures and unknown
    /// foreign ids.
    #[error("{0}")]
    BadRequest(String),

    /// 409 when a unique name, code, key or email is already taken.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure described by a message that is logged, not returned.
    #[error("{0}")]
    InternalError(String),
}

/// Maps each variant to a status code and an [`ErrorDto`] body.
///
/// Client errors carry their message; everything that is not the caller's fault is
/// logged and answered with a generic 500 so storage or crypto details never leak.
/// Authentication failures choose their own status in [`AuthError`].
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Logs any displayable error and answers 500 with a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
