//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the uniform `{code, message, data}` response envelope.
//! The `AppError` enum serves as the top-level error type that wraps domain-specific
//! errors and implements `IntoResponse` so handlers can simply return
//! `Result<_, AppError>`.

pub mod auth;
pub mod business;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    dto::api::ApiResponse,
    error::{auth::AuthError, business::BusinessError, config::ConfigError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to envelope responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` and `BusinessError` handle
/// their own response mapping, while generic variants provide standard codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// User-facing business rule violation.
    ///
    /// Delegates to `BusinessError::into_response()`; the variant carries the
    /// exact message the frontend expects.
    #[error(transparent)]
    BusinessErr(#[from] BusinessError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem error, primarily from upload storage.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed multipart upload body.
    ///
    /// Results in 400 Bad Request as the client sent an unreadable body.
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),

    /// Resource not found error.
    ///
    /// Results in a 404 envelope with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in a 400 envelope with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Builds the standard not-found error for an entity addressed by id.
    ///
    /// The message format matches what the frontend displays verbatim.
    pub fn not_found(resource: &str, id: i32) -> Self {
        Self::NotFound(format!("{} (ID: {}) 不存在", resource, id))
    }
}

/// Converts application errors into envelope responses.
///
/// Maps each error variant to the appropriate envelope code and message.
/// Authentication and business errors delegate to their own response handling,
/// while other errors use standard mappings. Internal errors are logged with
/// full details but return generic messages to avoid information leakage.
///
/// # Returns
/// - 400 - For `BadRequest` and malformed multipart bodies
/// - 404 - For `NotFound`
/// - 500 - For all other error types (DbErr, IoErr, config, etc.)
/// - Variable - For `AuthErr`/`BusinessErr`, delegated to their own mapping
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BusinessErr(err) => err.into_response(),
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error(404, msg)),
            )
                .into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(400, msg)),
            )
                .into_response(),
            Self::MultipartErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(400, format!("参数错误: {}", err))),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error(500, "系统异常，请联系管理员")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 envelope response.
///
/// This struct logs the error message and returns a generic message to the client
/// to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific envelope mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 envelope responses.
///
/// Logs the full error message for debugging, but returns a generic error message
/// to the client to avoid exposing internal implementation details or sensitive
/// information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(500, "系统异常，请联系管理员")),
        )
            .into_response()
    }
}
