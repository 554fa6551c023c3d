use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::jurisdiction::{CreateJurisdictionParam, UpdateJurisdictionParam},
    service::jurisdiction::JurisdictionService,
};

mod create;
