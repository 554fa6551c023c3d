use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::status::{CreateStatusParam, UpdateStatusParam},
    service::status::StatusService,
};

mod create;
