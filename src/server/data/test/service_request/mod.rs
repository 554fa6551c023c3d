use chrono::{TimeDelta, Utc};
use sea_orm::{Condition, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::service_request::ServiceRequestRepository,
    error::AppError,
    model::{
        page::PageParam,
        report::{prepare_query, ReportFilter},
        service_request::{
            ContactMethod, CreateServiceRequestParam, Reporter, UpdateServiceRequestParam,
        },
    },
};

mod create;
mod delete;
mod get_paginated;
mod next_sequence;
mod update;

fn reporter() -> Reporter {
    Reporter {
        name: "Jane Citizen".to_string(),
        phone: "255700000001".to_string(),
        email: None,
        account: Some("ACC-1".to_string()),
    }
}
