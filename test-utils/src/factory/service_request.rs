//! Service request factory for creating test service request entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ServiceRequestFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    jurisdiction_id: Option<i32>,
    group_id: Option<i32>,
    service_id: i32,
    priority_id: i32,
    status_id: i32,
    reporter_name: String,
    method: String,
    workspace: Option<String>,
    assignee_id: Option<i32>,
    resolved_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> ServiceRequestFactory<'a> {
    /// Creates a new factory for a request against existing service, priority and status rows.
    ///
    /// Defaults: code `"SR{id}"`, method `"call"`, created now, unresolved and unassigned.
    pub fn new(db: &'a DatabaseConnection, service_id: i32, priority_id: i32, status_id: i32) -> Self {
        Self {
            db,
            code: format!("SR{:08}", next_id()),
            jurisdiction_id: None,
            group_id: None,
            service_id,
            priority_id,
            status_id,
            reporter_name: "Jane Citizen".to_string(),
            method: "call".to_string(),
            workspace: None,
            assignee_id: None,
            resolved_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn jurisdiction_id(mut self, jurisdiction_id: i32) -> Self {
        self.jurisdiction_id = Some(jurisdiction_id);
        self
    }

    pub fn group_id(mut self, group_id: i32) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn reporter_name(mut self, name: impl Into<String>) -> Self {
        self.reporter_name = name.into();
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn assignee_id(mut self, assignee_id: i32) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    pub fn resolved_at(mut self, resolved_at: DateTime<Utc>) -> Self {
        self.resolved_at = Some(resolved_at);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::service_request::Model, DbErr> {
        entity::service_request::ActiveModel {
            code: ActiveValue::Set(self.code),
            jurisdiction_id: ActiveValue::Set(self.jurisdiction_id),
            group_id: ActiveValue::Set(self.group_id),
            service_id: ActiveValue::Set(self.service_id),
            priority_id: ActiveValue::Set(self.priority_id),
            status_id: ActiveValue::Set(self.status_id),
            reporter_name: ActiveValue::Set(self.reporter_name),
            reporter_phone: ActiveValue::Set("255700000000".to_string()),
            reporter_email: ActiveValue::Set(None),
            reporter_account: ActiveValue::Set(None),
            description: ActiveValue::Set("Water pipe is leaking".to_string()),
            address: ActiveValue::Set(None),
            method: ActiveValue::Set(self.method),
            workspace: ActiveValue::Set(self.workspace),
            operator_id: ActiveValue::Set(None),
            assignee_id: ActiveValue::Set(self.assignee_id),
            call_started_at: ActiveValue::Set(None),
            call_ended_at: ActiveValue::Set(None),
            resolved_at: ActiveValue::Set(self.resolved_at),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_service_request(
    db: &DatabaseConnection,
    service_id: i32,
    priority_id: i32,
    status_id: i32,
) -> Result<entity::service_request::Model, DbErr> {
    ServiceRequestFactory::new(db, service_id, priority_id, status_id)
        .build()
        .await
}
