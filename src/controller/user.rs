use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    dto::{
        api::{clamp_paging, ApiResponse},
        article::ArticleListItemDto,
        user::{ChangePasswordRequest, UpdateUserRequest, UserDto},
    },
    error::AppError,
    middleware::auth::AuthUser,
    model::user::UpdateProfileParams,
    service::{article::ArticleService, user::UserService},
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize)]
pub struct MyArticlesParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    /// `published` or `draft`; anything else means no filter.
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct MyFavoritesParams {
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

/// Get the authenticated user's profile.
#[utoipa::path(
    get,
    path = "/api/user/info",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current profile", body = UserDto),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn get_user_info(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);
    let user = service.get_info(principal.user_id).await?;

    Ok(Json(ApiResponse::success(user.into_dto())))
}

/// Update the authenticated user's profile.
///
/// Only nickname, avatar and bio are editable through this endpoint.
#[utoipa::path(
    put,
    path = "/api/user/info",
    tag = USER_TAG,
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn update_user_info(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);
    service
        .update_profile(
            principal.user_id,
            UpdateProfileParams {
                nickname: payload.nickname,
                avatar: payload.avatar,
                bio: payload.bio,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("更新成功")))
}

/// Change the authenticated user's password.
///
/// The current password must verify before the new one is stored.
#[utoipa::path(
    put,
    path = "/api/user/password",
    tag = USER_TAG,
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Wrong current password or weak new password"),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = UserService::new(&state.db);
    service
        .change_password(
            principal.user_id,
            &payload.old_password,
            &payload.new_password,
        )
        .await?;

    Ok(Json(ApiResponse::ok("密码修改成功")))
}

/// Get the authenticated user's own articles, drafts included.
#[utoipa::path(
    get,
    path = "/api/user/articles",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("status" = Option<String>, Query, description = "published or draft")
    ),
    responses(
        (status = 200, description = "Page of own articles", body = Vec<ArticleListItemDto>),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn get_my_articles(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Query(params): Query<MyArticlesParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, size) = clamp_paging(params.page, params.size);

    let published = match params.status.as_deref() {
        Some("published") => Some(true),
        Some("draft") => Some(false),
        _ => None,
    };

    let service = ArticleService::new(&state.db);
    let articles = service
        .my_articles(principal.user_id, published, page, size)
        .await?;

    Ok(Json(ApiResponse::success(articles.into_dto())))
}

/// Get the articles the authenticated user has favorited.
#[utoipa::path(
    get,
    path = "/api/user/favorites",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("size" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of favorited articles", body = Vec<ArticleListItemDto>),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn get_my_favorites(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Query(params): Query<MyFavoritesParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, size) = clamp_paging(params.page, params.size);

    let service = ArticleService::new(&state.db);
    let articles = service
        .my_favorites(principal.user_id, page, size)
        .await?;

    Ok(Json(ApiResponse::success(articles.into_dto())))
}
