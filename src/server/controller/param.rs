//! Query parameters shared by list and report endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::AppError,
    model::{page::PageParam, report::ReportFilter},
    util::parse::{parse_datetime, parse_id_list, parse_str_list},
};

/// `?page=&limit=&q=` accepted by every list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// 1-based page number (default: 1)
    pub page: Option<u64>,
    /// Records per page (default: 10, max: 100)
    pub limit: Option<u64>,
    /// Free text search
    pub q: Option<String>,
}

impl PaginationParam {
    pub fn into_page(self) -> PageParam {
        PageParam::new(self.page, self.limit, self.q)
    }
}

/// Report filter as sent by the dashboard.
///
/// List filters are comma separated, e.g. `?services=1,4&workspaces=Call Center`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportFilterParam {
    /// Lower bound on creation time as RFC 3339 or `YYYY-MM-DD`, moved to the start of its day
    pub started_at: Option<String>,
    /// Upper bound on creation time as RFC 3339 or `YYYY-MM-DD`, moved to the end of its day
    pub ended_at: Option<String>,
    /// Comma separated jurisdiction ids
    pub jurisdictions: Option<String>,
    /// Comma separated service group ids
    pub groups: Option<String>,
    /// Comma separated service ids
    pub services: Option<String>,
    /// Comma separated status ids
    pub statuses: Option<String>,
    /// Comma separated priority ids
    pub priorities: Option<String>,
    /// Comma separated workspace names
    pub workspaces: Option<String>,
}

impl ReportFilterParam {
    /// # Returns
    /// - `Ok(ReportFilter)` - Parsed filter
    /// - `Err(AppError::BadRequest)` - A date is malformed or an id list contains something other than numbers
    pub fn into_filter(self) -> Result<ReportFilter, AppError> {
        Ok(ReportFilter {
            started_at: parse_datetime("started_at", self.started_at.as_deref())?,
            ended_at: parse_datetime("ended_at", self.ended_at.as_deref())?,
            jurisdictions: parse_id_list("jurisdictions", self.jurisdictions.as_deref())?,
            groups: parse_id_list("groups", self.groups.as_deref())?,
            services: parse_id_list("services", self.services.as_deref())?,
            statuses: parse_id_list("statuses", self.statuses.as_deref())?,
            priorities: parse_id_list("priorities", self.priorities.as_deref())?,
            workspaces: parse_str_list(self.workspaces.as_deref()),
        })
    }
}
