use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::party::CreatePartyDto,
    server::{error::AppError, model::party::UpdatePartyParam, service::party::PartyService},
};

mod create;
