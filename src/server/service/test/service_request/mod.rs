use chrono::{Datelike, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::{
        report::ReportFilter,
        page::PageParam,
        service_request::{
            code_prefix, ContactMethod, NewServiceRequest, Reporter, UpdateServiceRequestParam,
        },
    },
    service::service_request::ServiceRequestService,
};

mod create;
mod get_paginated;
mod update;

fn new_request(service_id: i32) -> NewServiceRequest {
    NewServiceRequest {
        service_id,
        jurisdiction_id: None,
        priority_id: None,
        status_id: None,
        reporter: Reporter {
            name: "Jane Citizen".to_string(),
            phone: "255700000000".to_string(),
            email: None,
            account: None,
        },
        description: "Water pipe is leaking".to_string(),
        address: None,
        method: ContactMethod::Call,
        workspace: None,
        assignee_id: None,
        call_started_at: None,
        call_ended_at: None,
    }
}
