use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::comment::CommentRepository,
    model::{comment::CreateCommentParam, page::PageParam},
};

mod create;
mod get_paginated_by_request;
