//! Service request fixtures for creating in-memory test data.
//!
//! All timestamps are anchored at [`created_at`] so durations are deterministic.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use entity::service_request;

pub const DEFAULT_CODE: &str = "WTR2600001";

/// Creation time shared by every fixture: 2026-01-05 08:00 UTC.
pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap()
}

/// Creates an unresolved, unassigned request for service 1 with priority 1 and status 1.
pub fn entity() -> service_request::Model {
    entity_builder().build()
}

pub fn entity_builder() -> ServiceRequestEntityBuilder {
    let created_at = created_at();
    ServiceRequestEntityBuilder {
        entity: service_request::Model {
            id: 1,
            code: DEFAULT_CODE.to_string(),
            jurisdiction_id: None,
            group_id: Some(1),
            service_id: 1,
            priority_id: 1,
            status_id: 1,
            reporter_name: "Jane Citizen".to_string(),
            reporter_phone: "255700000000".to_string(),
            reporter_email: None,
            reporter_account: None,
            description: "Water pipe is leaking".to_string(),
            address: None,
            method: "call".to_string(),
            workspace: None,
            operator_id: None,
            assignee_id: None,
            call_started_at: None,
            call_ended_at: None,
            resolved_at: None,
            created_at,
            updated_at: created_at,
        },
    }
}

pub struct ServiceRequestEntityBuilder {
    entity: service_request::Model,
}

impl ServiceRequestEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn jurisdiction_id(mut self, jurisdiction_id: i32) -> Self {
        self.entity.jurisdiction_id = Some(jurisdiction_id);
        self
    }

    pub fn service_id(mut self, service_id: i32) -> Self {
        self.entity.service_id = service_id;
        self
    }

    pub fn priority_id(mut self, priority_id: i32) -> Self {
        self.entity.priority_id = priority_id;
        self
    }

    pub fn status_id(mut self, status_id: i32) -> Self {
        self.entity.status_id = status_id;
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.entity.method = method.into();
        self
    }

    pub fn workspace(mut self, workspace: impl Into<String>) -> Self {
        self.entity.workspace = Some(workspace.into());
        self
    }

    pub fn assignee_id(mut self, assignee_id: i32) -> Self {
        self.entity.assignee_id = Some(assignee_id);
        self
    }

    /// Marks the request resolved the given number of hours after creation.
    pub fn resolved_after_hours(mut self, hours: i64) -> Self {
        self.entity.resolved_at = Some(self.entity.created_at + TimeDelta::hours(hours));
        self
    }

    /// Records a call of the given length starting at creation time.
    pub fn call_seconds(mut self, seconds: i64) -> Self {
        self.entity.call_started_at = Some(self.entity.created_at);
        self.entity.call_ended_at = Some(self.entity.created_at + TimeDelta::seconds(seconds));
        self
    }

    pub fn build(self) -> service_request::Model {
        self.entity
    }
}
