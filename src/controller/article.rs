use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    dto::{
        api::{clamp_paging, ApiResponse},
        article::{ArticleDetailDto, ArticleListItemDto, ArticleRequest},
    },
    error::AppError,
    middleware::auth::{AuthUser, MaybeAuthUser},
    model::article::ArticleQuery,
    service::article::ArticleService,
    state::AppState,
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    pub category_id: Option<i32>,
    pub tag_id: Option<i32>,
    pub keyword: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_size() -> u64 {
    10
}

/// Get the public article listing.
///
/// Paginated, optionally filtered by category, tag or keyword. Only published,
/// approved articles appear; pinned articles come first.
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("categoryId" = Option<i32>, Query, description = "Filter by category"),
        ("tagId" = Option<i32>, Query, description = "Filter by tag"),
        ("keyword" = Option<String>, Query, description = "Title/summary keyword filter")
    ),
    responses(
        (status = 200, description = "Page of published articles", body = Vec<ArticleListItemDto>)
    ),
)]
pub async fn get_article_list(
    State(state): State<AppState>,
    Query(params): Query<ArticleListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, size) = clamp_paging(params.page, params.size);

    let service = ArticleService::new(&state.db);
    let articles = service
        .list_public(ArticleQuery {
            page,
            size,
            category_id: params.category_id,
            tag_id: params.tag_id,
            keyword: params.keyword,
        })
        .await?;

    Ok(Json(ApiResponse::success(articles.into_dto())))
}

/// Get one article with full content.
///
/// Counts the view. Unpublished or unapproved articles are 404 to everyone
/// but their author and admins; authenticated readers also get their own
/// like/favorite state.
#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article detail", body = ArticleDetailDto),
        (status = 404, description = "Article not found or not visible")
    ),
)]
pub async fn get_article_detail(
    State(state): State<AppState>,
    MaybeAuthUser(principal): MaybeAuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);
    let detail = service.detail(id, principal.as_ref()).await?;

    Ok(Json(ApiResponse::success(detail.into_dto())))
}

/// Create an article.
///
/// Admin authors are auto-approved; everyone else enters the review queue.
///
/// # Returns
/// - `200` - Envelope carrying the new article id
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article created", body = i32),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(payload): Json<ArticleRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = ArticleService::new(&state.db);
    let article_id = service.create(payload.into(), &principal).await?;

    Ok(Json(ApiResponse::success_with("文章创建成功", article_id)))
}

/// Update an article. Author only.
#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article updated"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Article not found")
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<ArticleRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = ArticleService::new(&state.db);
    service.update(id, payload.into(), &principal).await?;

    Ok(Json(ApiResponse::ok("文章更新成功")))
}

/// Delete an article. Author only.
#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Article not found")
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);
    service.delete(id, &principal).await?;

    Ok(Json(ApiResponse::ok("文章删除成功")))
}

/// Publish an article. Author only; stamps published_at on first publication.
#[utoipa::path(
    put,
    path = "/api/articles/{id}/publish",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article published"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Article not found")
    ),
)]
pub async fn publish_article(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);
    service.set_published(id, true, &principal).await?;

    Ok(Json(ApiResponse::ok("文章发布成功")))
}

/// Unpublish an article back to draft visibility. Author only.
#[utoipa::path(
    put,
    path = "/api/articles/{id}/unpublish",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article unpublished"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Article not found")
    ),
)]
pub async fn unpublish_article(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);
    service.set_published(id, false, &principal).await?;

    Ok(Json(ApiResponse::ok("文章下架成功")))
}

/// Like an article. At most once per user, enforced by the storage layer.
#[utoipa::path(
    post,
    path = "/api/articles/{id}/like",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article liked"),
        (status = 400, description = "Already liked"),
        (status = 404, description = "Article not found")
    ),
)]
pub async fn like_article(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);
    service.like(id, principal.user_id).await?;

    Ok(Json(ApiResponse::ok("点赞成功")))
}

/// Remove an article like. The counter never goes below zero.
#[utoipa::path(
    delete,
    path = "/api/articles/{id}/like",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Like removed"),
        (status = 404, description = "Article not found")
    ),
)]
pub async fn unlike_article(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);
    service.unlike(id, principal.user_id).await?;

    Ok(Json(ApiResponse::ok("取消点赞成功")))
}

/// Favorite an article. At most once per user, enforced by the storage layer.
#[utoipa::path(
    post,
    path = "/api/articles/{id}/favorite",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article favorited"),
        (status = 400, description = "Already favorited"),
        (status = 404, description = "Article not found")
    ),
)]
pub async fn favorite_article(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);
    service.favorite(id, principal.user_id).await?;

    Ok(Json(ApiResponse::ok("收藏成功")))
}

/// Remove an article favorite.
#[utoipa::path(
    delete,
    path = "/api/articles/{id}/favorite",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Favorite removed"),
        (status = 404, description = "Article not found")
    ),
)]
pub async fn unfavorite_article(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);
    service.unfavorite(id, principal.user_id).await?;

    Ok(Json(ApiResponse::ok("取消收藏成功")))
}
