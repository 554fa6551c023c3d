use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

use crate::{
    model::resource::{Action, Resource},
    server::{
        error::AppError,
        service::seed::{SeedService, ADMINISTRATOR_ROLE},
    },
};

mod run;
