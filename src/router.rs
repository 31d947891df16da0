//! Axum route configuration and API documentation.
//!
//! All endpoints share one `Router<AppState>`; uploaded images are served
//! statically under `/uploads`, and the OpenAPI document generated from the
//! controller annotations is browsable at `/swagger-ui`.

use std::path::Path;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{article, article_review, auth, category, comment, tag, upload, user},
    dto,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::register,
        auth::refresh_token,
        auth::logout,
        article::get_article_list,
        article::get_article_detail,
        article::create_article,
        article::update_article,
        article::delete_article,
        article::publish_article,
        article::unpublish_article,
        article::like_article,
        article::unlike_article,
        article::favorite_article,
        article::unfavorite_article,
        article_review::get_pending_articles,
        article_review::review_article,
        comment::get_comment_list,
        comment::create_comment,
        comment::delete_comment,
        comment::like_comment,
        comment::unlike_comment,
        user::get_user_info,
        user::update_user_info,
        user::change_password,
        user::get_my_articles,
        user::get_my_favorites,
        category::get_category_list,
        category::get_category_detail,
        tag::get_tag_list,
        tag::search_tags,
        upload::upload_cover,
        upload::upload_avatar,
        upload::upload_image,
    ),
    components(schemas(
        dto::auth::LoginRequest,
        dto::auth::RegisterRequest,
        dto::auth::RefreshTokenRequest,
        dto::auth::LoginResponse,
        dto::auth::UserInfoDto,
        dto::article::ArticleRequest,
        dto::article::ReviewAction,
        dto::article::ReviewArticleRequest,
        dto::article::ArticleListItemDto,
        dto::article::ArticleDetailDto,
        dto::article::AuthorDto,
        dto::article::CategoryBriefDto,
        dto::article::TagBriefDto,
        dto::comment::CommentRequest,
        dto::comment::CommentDto,
        dto::user::UserDto,
        dto::user::UpdateUserRequest,
        dto::user::ChangePasswordRequest,
        dto::category::CategoryDto,
        dto::tag::TagDto,
        dto::upload::UploadDto,
    ))
)]
struct ApiDoc;

pub fn router(upload_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/refresh", post(auth::refresh_token))
        .route("/api/auth/logout", post(auth::logout))
        .route(
            "/api/articles",
            get(article::get_article_list).post(article::create_article),
        )
        .route(
            "/api/articles/{id}",
            get(article::get_article_detail)
                .put(article::update_article)
                .delete(article::delete_article),
        )
        .route("/api/articles/{id}/publish", put(article::publish_article))
        .route(
            "/api/articles/{id}/unpublish",
            put(article::unpublish_article),
        )
        .route(
            "/api/articles/{id}/like",
            post(article::like_article).delete(article::unlike_article),
        )
        .route(
            "/api/articles/{id}/favorite",
            post(article::favorite_article).delete(article::unfavorite_article),
        )
        .route(
            "/api/admin/articles/pending",
            get(article_review::get_pending_articles),
        )
        .route(
            "/api/admin/articles/{id}/review",
            post(article_review::review_article),
        )
        .route(
            "/api/comments",
            get(comment::get_comment_list).post(comment::create_comment),
        )
        .route("/api/comments/{id}", axum::routing::delete(comment::delete_comment))
        .route(
            "/api/comments/{id}/like",
            post(comment::like_comment).delete(comment::unlike_comment),
        )
        .route(
            "/api/user/info",
            get(user::get_user_info).put(user::update_user_info),
        )
        .route("/api/user/password", put(user::change_password))
        .route("/api/user/articles", get(user::get_my_articles))
        .route("/api/user/favorites", get(user::get_my_favorites))
        .route("/api/categories", get(category::get_category_list))
        .route("/api/categories/{id}", get(category::get_category_detail))
        .route("/api/tags", get(tag::get_tag_list))
        .route("/api/tags/search", get(tag::search_tags))
        .route("/api/upload/cover", post(upload::upload_cover))
        .route("/api/upload/avatar", post(upload::upload_avatar))
        .route("/api/upload/image", post(upload::upload_image))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
