use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::jurisdiction::JurisdictionRepository,
    model::jurisdiction::CreateJurisdictionParam,
};

mod create;
mod is_referenced;
