use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    data::tag::TagRepository,
    dto::{api::ApiResponse, tag::TagDto},
    error::AppError,
    state::AppState,
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// Search results are capped at the ten most used matches.
const SEARCH_LIMIT: u64 = 10;

#[derive(Deserialize)]
pub struct TagSearchParams {
    pub keyword: String,
}

fn into_dto(tag: entity::tag::Model) -> TagDto {
    TagDto {
        id: tag.id,
        name: tag.name,
        color: tag.color,
        article_count: tag.article_count,
    }
}

/// Get every tag, most used first.
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses((status = 200, description = "All tags", body = Vec<TagDto>)),
)]
pub async fn get_tag_list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = TagRepository::new(&state.db).get_all().await?;

    Ok(Json(ApiResponse::success(
        tags.into_iter().map(into_dto).collect::<Vec<_>>(),
    )))
}

/// Search tags by name substring, most used first.
#[utoipa::path(
    get,
    path = "/api/tags/search",
    tag = TAG_TAG,
    params(("keyword" = String, Query, description = "Name substring to match")),
    responses((status = 200, description = "Matching tags", body = Vec<TagDto>)),
)]
pub async fn search_tags(
    State(state): State<AppState>,
    Query(params): Query<TagSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let tags = TagRepository::new(&state.db)
        .search(&params.keyword, SEARCH_LIMIT)
        .await?;

    Ok(Json(ApiResponse::success(
        tags.into_iter().map(into_dto).collect::<Vec<_>>(),
    )))
}
