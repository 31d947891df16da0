use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    dto::{
        api::{clamp_paging, ApiResponse},
        comment::{CommentDto, CommentRequest},
    },
    error::AppError,
    middleware::auth::AuthUser,
    service::comment::CommentService,
    state::AppState,
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListParams {
    pub article_id: i32,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_size() -> u64 {
    20
}

/// Get a page of an article's comments, newest first.
///
/// Soft-deleted comments are excluded.
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    params(
        ("articleId" = i32, Query, description = "Article id"),
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("size" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of comments", body = Vec<CommentDto>)
    ),
)]
pub async fn get_comment_list(
    State(state): State<AppState>,
    Query(params): Query<CommentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, size) = clamp_paging(params.page, params.size);

    let service = CommentService::new(&state.db);
    let comments = service.list(params.article_id, page, size).await?;

    Ok(Json(ApiResponse::success(comments.into_dto())))
}

/// Post a comment, optionally as a reply inside an existing thread.
///
/// # Returns
/// - `200` - Envelope carrying the new comment id
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Comment created", body = i32),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Article not found")
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(payload): Json<CommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = CommentService::new(&state.db);
    let comment_id = service.create(payload.into(), principal.user_id).await?;

    Ok(Json(ApiResponse::success_with("评论成功", comment_id)))
}

/// Soft-delete a comment. Author only; the row stays so replies keep their
/// anchor.
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment deleted"),
        (status = 403, description = "Not the comment author"),
        (status = 400, description = "Comment not found")
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);
    service.delete(id, principal.user_id).await?;

    Ok(Json(ApiResponse::ok("删除成功")))
}

/// Like a comment. At most once per user, enforced by the storage layer.
#[utoipa::path(
    post,
    path = "/api/comments/{id}/like",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment liked"),
        (status = 400, description = "Already liked or comment not found")
    ),
)]
pub async fn like_comment(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);
    service.like(id, principal.user_id).await?;

    Ok(Json(ApiResponse::ok("点赞成功")))
}

/// Remove a comment like. The counter never goes below zero.
#[utoipa::path(
    delete,
    path = "/api/comments/{id}/like",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Like removed"),
        (status = 400, description = "Comment not found")
    ),
)]
pub async fn unlike_comment(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);
    service.unlike(id, principal.user_id).await?;

    Ok(Json(ApiResponse::ok("取消点赞成功")))
}
