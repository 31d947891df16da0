use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of a successful image upload.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UploadDto {
    /// Relative URL under `/uploads/` where the file is served from.
    pub url: String,
    /// Generated filename on disk.
    pub filename: String,
}
