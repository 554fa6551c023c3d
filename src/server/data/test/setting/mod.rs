use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::setting::SettingRepository, model::setting::UpdateSettingParam};

mod find_by_key;
