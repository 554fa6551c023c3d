use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::ReferenceDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServiceDto {
    pub id: i32,
    pub jurisdiction_id: Option<i32>,
    pub group: Option<ReferenceDto>,
    pub priority: Option<ReferenceDto>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub is_external: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateServiceDto {
    pub jurisdiction_id: Option<i32>,
    pub group_id: i32,
    pub priority_id: Option<i32>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub is_external: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateServiceDto {
    pub jurisdiction_id: Option<i32>,
    pub group_id: Option<i32>,
    pub priority_id: Option<i32>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_external: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedServicesDto {
    pub services: Vec<ServiceDto>,
    pub count: u64,
    pub pages: u64,
    pub page: u64,
    pub limit: u64,
}
