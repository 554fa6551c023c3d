use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::ReferenceDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PartyDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<ReferenceDto>,
    pub jurisdiction_id: Option<i32>,
    pub permissions: Vec<String>,
    pub confirmed: bool,
    pub locked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePartyDto {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub role_id: Option<i32>,
    pub jurisdiction_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePartyDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role_id: Option<i32>,
    pub jurisdiction_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedPartiesDto {
    pub parties: Vec<PartyDto>,
    pub count: u64,
    pub pages: u64,
    pub page: u64,
    pub limit: u64,
}
