use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    dto::{
        api::{clamp_paging, ApiResponse},
        article::{ArticleListItemDto, ReviewAction, ReviewArticleRequest},
    },
    error::AppError,
    middleware::auth::{AuthGuard, AuthUser, Permission},
    service::article::ArticleService,
    state::AppState,
};

/// Tag for grouping admin review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

#[derive(Deserialize)]
pub struct PendingListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_size() -> u64 {
    10
}

/// Get the queue of articles awaiting review, oldest first.
///
/// # Access Control
/// - `Admin` - Only admins can see the review queue
#[utoipa::path(
    get,
    path = "/api/admin/articles/pending",
    tag = REVIEW_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of pending articles", body = Vec<ArticleListItemDto>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin")
    ),
)]
pub async fn get_pending_articles(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Query(params): Query<PendingListParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    let (page, size) = clamp_paging(params.page, params.size);
    let service = ArticleService::new(&state.db);
    let articles = service.pending(page, size).await?;

    Ok(Json(ApiResponse::success(articles.into_dto())))
}

/// Approve or reject a pending article.
///
/// The Pending state is checked atomically in the update itself, so a second
/// decision on the same article fails with the invalid-state error no matter
/// how closely the two race.
///
/// # Access Control
/// - `Admin` - Only admins can review articles
#[utoipa::path(
    post,
    path = "/api/admin/articles/{id}/review",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Article id")),
    request_body = ReviewArticleRequest,
    responses(
        (status = 200, description = "Decision recorded"),
        (status = 400, description = "Article is not pending review"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Article not found")
    ),
)]
pub async fn review_article(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewArticleRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    let service = ArticleService::new(&state.db);
    service
        .review(id, payload.action.into(), principal.user_id, payload.note)
        .await?;

    let message = match payload.action {
        ReviewAction::Approve => "文章已批准",
        ReviewAction::Reject => "文章已拒绝",
    };
    Ok(Json(ApiResponse::ok(message)))
}
