use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::comment::CreateCommentParam, service::comment::CommentService,
};

mod create;
