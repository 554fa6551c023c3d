use crate::server::{
    data::status::StatusRepository,
    model::status::CreateStatusParam,
};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_default;
mod is_referenced;
