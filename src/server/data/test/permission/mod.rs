use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::server::{data::permission::PermissionRepository, model::permission::CreatePermissionParam};

mod ensure;
