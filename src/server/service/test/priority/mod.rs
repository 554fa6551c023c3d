use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::priority::{CreatePriorityParam, UpdatePriorityParam},
    service::priority::PriorityService,
};

mod create;
mod delete;
