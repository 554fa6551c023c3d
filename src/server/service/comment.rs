use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, service_request::ServiceRequestRepository},
    error::AppError,
    model::{
        comment::{Comment, CreateCommentParam},
        page::{PageParam, Paginated},
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment to an existing service request
    pub async fn create(&self, params: CreateCommentParam) -> Result<Comment, AppError> {
        if params.content.trim().is_empty() {
            return Err(AppError::BadRequest("Comment content is required".to_string()));
        }

        if !ServiceRequestRepository::new(self.db)
            .exists(params.service_request_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Service request {} not found",
                params.service_request_id
            )));
        }

        Ok(CommentRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Comment>, AppError> {
        Ok(CommentRepository::new(self.db).find_by_id(id).await?)
    }

    /// Comments of one request, oldest first
    pub async fn get_paginated_by_request(
        &self,
        service_request_id: i32,
        param: &PageParam,
    ) -> Result<Paginated<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .get_paginated_by_request(service_request_id, param)
            .await?)
    }

    /// Returns the deleted comment so callers can announce which request changed
    pub async fn delete(&self, id: i32) -> Result<Option<Comment>, AppError> {
        let repo = CommentRepository::new(self.db);

        let Some(comment) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        repo.delete(id).await?;

        Ok(Some(comment))
    }
}
