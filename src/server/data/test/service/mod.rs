use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::service::ServiceRepository, model::page::PageParam};

mod get_by_id;
mod get_paginated;
