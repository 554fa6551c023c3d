use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummaryDto {
    pub total: u64,
    pub pending: u64,
    pub resolved: u64,
    /// Pending requests with no assignee.
    pub unattended: u64,
    pub average_ttr_seconds: Option<i64>,
    pub average_call_duration_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverviewItemDto {
    pub id: Option<i32>,
    pub name: String,
    pub color: Option<String>,
    pub count: u64,
    pub pending: u64,
    pub resolved: u64,
    pub average_ttr_seconds: Option<i64>,
}

/// Series ready for a bar or pie chart widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartDto {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BreakdownDto {
    pub items: Vec<OverviewItemDto>,
    pub chart: ChartDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverviewDto {
    pub summary: SummaryDto,
    pub jurisdictions: BreakdownDto,
    pub groups: BreakdownDto,
    pub services: BreakdownDto,
    pub statuses: BreakdownDto,
    pub priorities: BreakdownDto,
    pub methods: BreakdownDto,
    pub workspaces: BreakdownDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StandingDto {
    pub jurisdiction: Option<String>,
    pub group: Option<String>,
    pub service: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub color: Option<String>,
    pub count: u64,
}
