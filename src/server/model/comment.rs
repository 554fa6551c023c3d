use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, PaginatedCommentsDto},
    server::model::{page::Paginated, service_request::Reference},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub service_request_id: i32,
    pub commentator: Option<Reference>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model, commentator: Option<Reference>) -> Self {
        Self {
            id: entity.id,
            service_request_id: entity.service_request_id,
            commentator,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            service_request_id: self.service_request_id,
            commentator: self.commentator.map(Reference::into_dto),
            content: self.content,
            created_at: self.created_at,
        }
    }
}

impl Paginated<Comment> {
    pub fn into_dto(self) -> PaginatedCommentsDto {
        let pages = self.pages();
        PaginatedCommentsDto {
            comments: self.items.into_iter().map(Comment::into_dto).collect(),
            count: self.total,
            pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub service_request_id: i32,
    pub commentator_id: Option<i32>,
    pub content: String,
}
