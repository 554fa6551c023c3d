use chrono::{TimeDelta, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::report::ReportFilter, service::report::ReportService,
};

mod export;
mod overview;
mod summary;
