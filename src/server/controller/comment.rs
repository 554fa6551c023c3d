use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, PaginatedCommentsDto},
        resource::{Action, Resource},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{comment::CreateCommentParam, page::PageParam},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListParam {
    /// Service request whose comments to list
    pub service_request: i32,
    /// 1-based page number (default: 1)
    pub page: Option<u64>,
    /// Records per page (default: 10, max: 100)
    pub limit: Option<u64>,
}

/// Comment on a service request as the signed in party.
///
/// # Access Control
/// - `comments:create`
///
/// # Returns
/// - `201 Created` - Comment with its commentator
/// - `400 Bad Request` - Empty content
/// - `404 Not Found` - Service request not found
#[utoipa::path(
    post,
    path = "/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 400, description = "Empty content", body = ErrorDto),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Service request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let party = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Comments, Action::Create)])
        .await?;

    let comment = CommentService::new(&state.db)
        .create(CreateCommentParam {
            service_request_id: payload.service_request_id,
            commentator_id: Some(party.id),
            content: payload.content,
        })
        .await?;

    state.events.created(Resource::Comments, comment.id);

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// List a service request's comments, oldest first.
#[utoipa::path(
    get,
    path = "/comments",
    tag = COMMENT_TAG,
    params(CommentListParam),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = PaginatedCommentsDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CommentListParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let page = PageParam::new(params.page, params.limit, None);
    let comments = CommentService::new(&state.db)
        .get_paginated_by_request(params.service_request, &page)
        .await?;

    Ok((StatusCode::OK, Json(comments.into_dto())))
}

#[utoipa::path(
    get,
    path = "/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Successfully retrieved comment", body = CommentDto),
        (status = 403, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match CommentService::new(&state.db).get_by_id(id).await? {
        Some(comment) => Ok((StatusCode::OK, Json(comment.into_dto()))),
        None => Err(AppError::NotFound("Comment not found".to_string())),
    }
}

#[utoipa::path(
    delete,
    path = "/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 403, description = "Missing token or permission", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::new(Resource::Comments, Action::Delete)])
        .await?;

    let Some(comment) = CommentService::new(&state.db).delete(id).await? else {
        return Err(AppError::NotFound("Comment not found".to_string()));
    };

    tracing::debug!(
        "Comment {} removed from service request {}",
        comment.id,
        comment.service_request_id
    );
    state.events.deleted(Resource::Comments, comment.id);

    Ok(StatusCode::NO_CONTENT)
}
