use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ApiResponse;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied on a protected route.
    ///
    /// Results in a 401 response before any handler logic runs.
    #[error("Missing bearer token in Authorization header")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    ///
    /// Wraps the underlying jsonwebtoken error for server-side diagnostics.
    /// Results in a 401 response.
    #[error("Failed to validate bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token claims could not be mapped to an authenticated principal.
    ///
    /// Happens when a structurally valid token carries an unknown role value.
    /// Results in a 401 response.
    #[error("Token carries invalid claims: {0}")]
    InvalidClaims(String),

    /// The refresh token failed validation during token refresh.
    ///
    /// Results in a 401 response with a refresh-specific message so the
    /// frontend knows to force a new login.
    #[error("Refresh token is invalid or expired")]
    InvalidRefreshToken,

    /// A validated token references a user that no longer exists.
    ///
    /// Results in a 401 response.
    #[error("User {0} referenced by token no longer exists")]
    UserGone(i32),

    /// An authenticated user lacks the permission a route requires.
    ///
    /// Results in a 403 response.
    #[error("User {user_id} denied access: {message}")]
    AccessDenied {
        /// Id of the user that was denied.
        user_id: i32,
        /// Which permission check failed.
        message: String,
    },
}

/// Converts authentication errors into envelope responses.
///
/// Maps authentication errors to the fixed codes and user-facing messages of the
/// envelope contract. Details are logged at debug level for diagnostics while
/// client-facing messages stay generic to avoid information leakage.
///
/// # Returns
/// - 401 - Missing/invalid tokens, invalid refresh tokens, deleted users
/// - 403 - Permission denials
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication failure: {}", self);

        let (status, code, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::InvalidClaims(_) => {
                (StatusCode::UNAUTHORIZED, 401, "认证失败，请重新登录")
            }
            Self::InvalidRefreshToken => (StatusCode::UNAUTHORIZED, 401, "无效的刷新Token"),
            Self::UserGone(_) => (StatusCode::UNAUTHORIZED, 401, "用户不存在"),
            Self::AccessDenied { .. } => (StatusCode::FORBIDDEN, 403, "权限不足"),
        };

        (status, Json(ApiResponse::<()>::error(code, message))).into_response()
    }
}
