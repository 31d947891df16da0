use axum::{extract::Multipart, extract::State, response::IntoResponse, Json};

use crate::{
    dto::{api::ApiResponse, upload::UploadDto},
    error::AppError,
    middleware::auth::AuthUser,
    service::upload::UploadService,
    state::AppState,
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Reads the `file` field out of the multipart body and stores it.
async fn store_from_multipart(
    state: &AppState,
    mut multipart: Multipart,
    sub_dir: &str,
) -> Result<UploadDto, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().map(|name| name.to_string());
            let data = field.bytes().await?;

            let stored = UploadService::new(&state.upload_dir)
                .store_image(filename.as_deref(), &data, sub_dir)
                .await?;

            return Ok(UploadDto {
                url: stored.url,
                filename: stored.filename,
            });
        }
    }

    Err(AppError::BadRequest("文件不能为空".to_string()))
}

/// Upload an article cover image.
#[utoipa::path(
    post,
    path = "/api/upload/cover",
    tag = UPLOAD_TAG,
    responses(
        (status = 200, description = "Image stored", body = UploadDto),
        (status = 400, description = "Missing, oversize or non-image file"),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn upload_cover(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let dto = store_from_multipart(&state, multipart, "covers").await?;
    Ok(Json(ApiResponse::success_with("上传成功", dto)))
}

/// Upload a user avatar image.
#[utoipa::path(
    post,
    path = "/api/upload/avatar",
    tag = UPLOAD_TAG,
    responses(
        (status = 200, description = "Image stored", body = UploadDto),
        (status = 400, description = "Missing, oversize or non-image file"),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn upload_avatar(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let dto = store_from_multipart(&state, multipart, "avatars").await?;
    Ok(Json(ApiResponse::success_with("上传成功", dto)))
}

/// Upload an inline editor image.
#[utoipa::path(
    post,
    path = "/api/upload/image",
    tag = UPLOAD_TAG,
    responses(
        (status = 200, description = "Image stored", body = UploadDto),
        (status = 400, description = "Missing, oversize or non-image file"),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    AuthUser(_principal): AuthUser,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let dto = store_from_multipart(&state, multipart, "images").await?;
    Ok(Json(ApiResponse::success_with("上传成功", dto)))
}
