use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::service_group::{CreateServiceGroupParam, UpdateServiceGroupParam},
    service::service_group::ServiceGroupService,
};

mod create;
