use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::party::PartyDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SigninDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SigninResponseDto {
    pub success: bool,
    pub party: PartyDto,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForgotDto {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecoverDto {
    pub token: String,
    pub password: String,
}

/// Body shared by `/confirm` and `/unlock`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordDto {
    pub password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}
