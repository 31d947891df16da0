//! Image upload storage.
//!
//! Uploaded images land under `<upload_dir>/<kind>/<YYYY-MM-DD>/` with a
//! generated filename, and are served back through the static `/uploads`
//! route. Validation happens before anything touches the filesystem.

use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;

/// Maximum accepted upload size.
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Image extensions accepted by the upload endpoints.
const ALLOWED_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// A stored upload: where it is served from and what it is called on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub url: String,
    pub filename: String,
}

pub struct UploadService<'a> {
    upload_dir: &'a Path,
}

impl<'a> UploadService<'a> {
    pub fn new(upload_dir: &'a Path) -> Self {
        Self { upload_dir }
    }

    /// Validates and stores one uploaded image.
    ///
    /// # Arguments
    /// - `original_filename` - Client-supplied filename, used only for its
    ///   extension
    /// - `data` - Raw file bytes
    /// - `sub_dir` - Target bucket (`covers`, `avatars`, `images`)
    ///
    /// # Returns
    /// - `Ok(StoredFile)` - Relative URL and generated filename
    /// - `Err(AppError::BadRequest)` - Empty file, oversize file, missing
    ///   filename or disallowed extension
    /// - `Err(AppError::IoErr)` - Filesystem failure while storing
    pub async fn store_image(
        &self,
        original_filename: Option<&str>,
        data: &[u8],
        sub_dir: &str,
    ) -> Result<StoredFile, AppError> {
        if data.is_empty() {
            return Err(AppError::BadRequest("文件不能为空".to_string()));
        }
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::BadRequest("文件大小不能超过5MB".to_string()));
        }

        let original = original_filename
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::BadRequest("文件名不能为空".to_string()))?;

        let extension = extension_of(original).ok_or_else(invalid_extension)?;
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(invalid_extension());
        }

        let date_dir = Utc::now().format("%Y-%m-%d").to_string();
        let dir: PathBuf = self.upload_dir.join(sub_dir).join(&date_dir);
        tokio::fs::create_dir_all(&dir).await?;

        let filename = format!("{}{}", Uuid::new_v4().simple(), extension);
        tokio::fs::write(dir.join(&filename), data).await?;

        let url = format!("/uploads/{}/{}/{}", sub_dir, date_dir, filename);
        tracing::info!("stored upload {}", url);

        Ok(StoredFile { url, filename })
    }
}

fn invalid_extension() -> AppError {
    AppError::BadRequest("只支持上传图片文件（jpg、png、gif、webp）".to_string())
}

/// Lowercased extension including the dot, or None when the name has none.
fn extension_of(filename: &str) -> Option<String> {
    filename
        .rfind('.')
        .map(|idx| filename[idx..].to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_upload_dir() -> PathBuf {
        std::env::temp_dir().join(format!("inkpress-upload-test-{}", Uuid::new_v4().simple()))
    }

    #[tokio::test]
    async fn rejects_empty_file() {
        let dir = temp_upload_dir();
        let service = UploadService::new(&dir);

        let result = service.store_image(Some("a.png"), &[], "images").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn rejects_oversize_file() {
        let dir = temp_upload_dir();
        let service = UploadService::new(&dir);
        let data = vec![0u8; MAX_FILE_SIZE + 1];

        let result = service.store_image(Some("a.png"), &data, "images").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn rejects_disallowed_extension() {
        let dir = temp_upload_dir();
        let service = UploadService::new(&dir);

        let result = service
            .store_image(Some("payload.exe"), b"MZ", "images")
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn rejects_missing_filename() {
        let dir = temp_upload_dir();
        let service = UploadService::new(&dir);

        let result = service.store_image(None, b"data", "images").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn stores_image_under_dated_directory() {
        let dir = temp_upload_dir();
        let service = UploadService::new(&dir);

        let stored = service
            .store_image(Some("Photo.JPG"), b"jpeg-bytes", "covers")
            .await
            .unwrap();

        assert!(stored.url.starts_with("/uploads/covers/"));
        assert!(stored.filename.ends_with(".jpg"));

        let date_dir = Utc::now().format("%Y-%m-%d").to_string();
        let on_disk = dir.join("covers").join(date_dir).join(&stored.filename);
        assert_eq!(tokio::fs::read(on_disk).await.unwrap(), b"jpeg-bytes");

        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}
