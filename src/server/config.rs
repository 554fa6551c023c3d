use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_JWT_EXPIRE_SECONDS: i64 = 86_400;
const DEFAULT_MAX_FAILED_ATTEMPTS: i32 = 5;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_expire_seconds: i64,

    /// Failed signins allowed before the account locks.
    pub max_failed_attempts: i32,

    pub default_admin_email: Option<String>,
    pub default_admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expire_seconds: parsed_or("JWT_EXPIRE_SECONDS", DEFAULT_JWT_EXPIRE_SECONDS)?,
            max_failed_attempts: parsed_or("MAX_FAILED_ATTEMPTS", DEFAULT_MAX_FAILED_ATTEMPTS)?,
            default_admin_email: std::env::var("DEFAULT_ADMIN_EMAIL").ok(),
            default_admin_password: std::env::var("DEFAULT_ADMIN_PASSWORD").ok(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
