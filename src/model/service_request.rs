use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::ReferenceDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReporterDto {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServiceRequestDto {
    pub id: i32,
    pub code: String,
    pub jurisdiction: Option<ReferenceDto>,
    pub group: Option<ReferenceDto>,
    pub service: Option<ReferenceDto>,
    pub priority: Option<ReferenceDto>,
    pub status: Option<ReferenceDto>,
    pub reporter: ReporterDto,
    pub description: String,
    pub address: Option<String>,
    pub method: String,
    pub workspace: Option<String>,
    pub operator: Option<ReferenceDto>,
    pub assignee: Option<ReferenceDto>,
    pub call_started_at: Option<DateTime<Utc>>,
    pub call_ended_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    /// Seconds from creation to resolution.
    pub ttr_seconds: Option<i64>,
    pub call_duration_seconds: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateServiceRequestDto {
    pub service_id: i32,
    pub jurisdiction_id: Option<i32>,
    pub priority_id: Option<i32>,
    pub status_id: Option<i32>,
    pub reporter: ReporterDto,
    pub description: String,
    pub address: Option<String>,
    pub method: Option<String>,
    pub workspace: Option<String>,
    pub assignee_id: Option<i32>,
    pub call_started_at: Option<DateTime<Utc>>,
    pub call_ended_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateServiceRequestDto {
    pub service_id: Option<i32>,
    pub jurisdiction_id: Option<i32>,
    pub priority_id: Option<i32>,
    pub status_id: Option<i32>,
    pub reporter: Option<ReporterDto>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub method: Option<String>,
    pub workspace: Option<String>,
    pub assignee_id: Option<i32>,
    pub call_started_at: Option<DateTime<Utc>>,
    pub call_ended_at: Option<DateTime<Utc>>,
    /// `true` stamps the resolution time, `false` reopens the request.
    pub resolved: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedServiceRequestsDto {
    pub servicerequests: Vec<ServiceRequestDto>,
    pub count: u64,
    pub pages: u64,
    pub page: u64,
    pub limit: u64,
}
