use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    data::{article::ArticleRepository, category::CategoryRepository},
    dto::{api::ApiResponse, category::CategoryDto},
    error::AppError,
    model::category::CategoryWithCount,
    state::AppState,
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Get every category in display order.
///
/// Each category carries its count of published, approved articles, computed
/// per request rather than stored.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryDto>)
    ),
)]
pub async fn get_category_list(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let category_repo = CategoryRepository::new(&state.db);
    let article_repo = ArticleRepository::new(&state.db);

    let categories = category_repo.get_all_ordered().await?;

    let mut result = Vec::with_capacity(categories.len());
    for category in categories {
        let article_count = article_repo.count_published_in_category(category.id).await?;
        result.push(
            CategoryWithCount {
                category,
                article_count,
            }
            .into_dto(),
        );
    }

    Ok(Json(ApiResponse::success(result)))
}

/// Get one category by id.
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category detail", body = CategoryDto),
        (status = 404, description = "Category not found")
    ),
)]
pub async fn get_category_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category_repo = CategoryRepository::new(&state.db);

    let Some(category) = category_repo.find_by_id(id).await? else {
        return Err(AppError::not_found("分类", id));
    };

    let article_count = ArticleRepository::new(&state.db)
        .count_published_in_category(category.id)
        .await?;

    Ok(Json(ApiResponse::success(
        CategoryWithCount {
            category,
            article_count,
        }
        .into_dto(),
    )))
}
