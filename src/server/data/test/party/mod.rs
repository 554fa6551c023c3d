use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::party::PartyRepository,
    model::party::UpdatePartyParam,
};

mod find_by_id;
mod record_failed_signin;
mod unlock;
mod update;
