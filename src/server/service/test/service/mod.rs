use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::service::{CreateServiceParam, UpdateServiceParam},
    service::service::ServiceService,
};

mod create;
