//! Wire-level request and response types.
//!
//! Everything in this module is serde-serializable with camelCase field names,
//! matching what the existing frontend sends and expects. Conversion between
//! these DTOs and the domain models in `crate::model` happens at the controller
//! boundary.

pub mod api;
pub mod article;
pub mod auth;
pub mod category;
pub mod comment;
pub mod tag;
pub mod upload;
pub mod user;

use crate::error::AppError;

/// Builds the standard validation failure from a list of field messages.
///
/// Returns `Ok(())` when no messages were collected, otherwise a 400 error with
/// the messages joined the same way the original API concatenated field errors.
pub(crate) fn validation_error(messages: Vec<&str>) -> Result<(), AppError> {
    if messages.is_empty() {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "参数校验失败: {}",
            messages.join(", ")
        )))
    }
}
