use crate::server::{
    data::priority::PriorityRepository,
    model::{
        page::PageParam,
        priority::{CreatePriorityParam, UpdatePriorityParam},
    },
};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_default;
mod get_paginated;
mod is_referenced;
mod update;

fn is_hex_color(value: &str) -> bool {
    value.len() == 7 && value.starts_with('#') && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
