use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::role::RoleRepository,
    model::role::{CreateRoleParam, UpdateRoleParam},
};

mod create;
mod update;
