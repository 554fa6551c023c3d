use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub id: i32,
    pub jurisdiction_id: Option<i32>,
    pub name: String,
    pub weight: i32,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStatusDto {
    pub jurisdiction_id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub weight: i32,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusDto {
    pub jurisdiction_id: Option<i32>,
    pub name: Option<String>,
    pub weight: Option<i32>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedStatusesDto {
    pub statuses: Vec<StatusDto>,
    pub count: u64,
    pub pages: u64,
    pub page: u64,
    pub limit: u64,
}
