use entity::prelude::*;
use sea_orm::EntityTrait;
use test_utils::{
    builder::TestBuilder,
    factory::{self, party::DEFAULT_PASSWORD},
};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::{token::TokenService, AuthService},
};

mod change;
mod recover;
mod signin;
mod unlock;

const MAX_FAILED_ATTEMPTS: i32 = 3;

fn tokens() -> TokenService {
    TokenService::new("test-secret", 3600)
}
