//! CSV export of service requests.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::server::{
    error::AppError,
    model::service_request::{Reference, References, ServiceRequest},
};

#[derive(Serialize)]
struct ExportRow<'r> {
    code: &'r str,
    reported_at: String,
    jurisdiction: Option<&'r str>,
    group: Option<&'r str>,
    service: Option<&'r str>,
    priority: Option<&'r str>,
    status: Option<&'r str>,
    reporter_name: &'r str,
    reporter_phone: &'r str,
    reporter_email: Option<&'r str>,
    description: &'r str,
    address: Option<&'r str>,
    method: &'static str,
    workspace: Option<&'r str>,
    operator: Option<&'r str>,
    assignee: Option<&'r str>,
    resolved_at: Option<String>,
    ttr_seconds: Option<i64>,
    call_duration_seconds: Option<i64>,
}

fn name<'r>(
    map: &'r std::collections::HashMap<i32, Reference>,
    id: Option<i32>,
) -> Option<&'r str> {
    id.and_then(|id| map.get(&id)).map(|r| r.name.as_str())
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Writes the requests as CSV with a header row, one line per request.
pub fn write_csv(requests: &[ServiceRequest], refs: &References) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for r in requests {
        writer.serialize(ExportRow {
            code: &r.code,
            reported_at: timestamp(r.created_at),
            jurisdiction: name(&refs.jurisdictions, r.jurisdiction_id),
            group: name(&refs.groups, r.group_id),
            service: name(&refs.services, Some(r.service_id)),
            priority: name(&refs.priorities, Some(r.priority_id)),
            status: name(&refs.statuses, Some(r.status_id)),
            reporter_name: &r.reporter.name,
            reporter_phone: &r.reporter.phone,
            reporter_email: r.reporter.email.as_deref(),
            description: &r.description,
            address: r.address.as_deref(),
            method: r.method.as_str(),
            workspace: r.workspace.as_deref(),
            operator: name(&refs.parties, r.operator_id),
            assignee: name(&refs.parties, r.assignee_id),
            resolved_at: r.resolved_at.map(timestamp),
            ttr_seconds: r.ttr_seconds(),
            call_duration_seconds: r.call_duration_seconds(),
        })?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("Failed to flush CSV export: {}", e)))
}
