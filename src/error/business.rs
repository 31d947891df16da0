use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ApiResponse;

/// User-facing business rule violations.
///
/// Each variant carries the exact message the existing frontend matches on, so
/// the display strings are part of the wire contract and must not be reworded.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BusinessError {
    /// Registration attempted with a username that is already taken.
    #[error("用户名已存在")]
    UsernameTaken,

    /// Registration attempted with an email that is already registered.
    #[error("邮箱已被注册")]
    EmailTaken,

    /// Login failed. Deliberately identical for unknown username and wrong
    /// password so the response does not reveal which accounts exist.
    #[error("用户名或密码错误")]
    BadCredentials,

    /// Login attempted on a disabled account.
    #[error("账号已被禁用")]
    AccountDisabled,

    /// Password change supplied a wrong current password.
    #[error("原密码错误")]
    WrongOldPassword,

    /// The referenced user does not exist.
    #[error("用户不存在")]
    UserNotFound,

    /// The referenced comment does not exist.
    #[error("评论不存在")]
    CommentNotFound,

    /// The user already has a like row for this target.
    #[error("已经点赞过了")]
    AlreadyLiked,

    /// The user already has a favorite row for this article.
    #[error("已经收藏过了")]
    AlreadyFavorited,

    /// approve/reject attempted on an article that is not Pending.
    #[error("文章不在待审核状态")]
    ReviewNotPending,

    /// The acting user does not own the targeted resource.
    ///
    /// Results in a 403 envelope; the message names the rejected operation.
    #[error("{0}")]
    Forbidden(String),
}

/// Converts business errors into envelope responses.
///
/// Ownership violations map to 403; every other rule violation is a 400 with
/// the variant's fixed message. Violations are logged at warn level.
impl IntoResponse for BusinessError {
    fn into_response(self) -> Response {
        tracing::warn!("Business rule violation: {}", self);

        let (status, code) = match self {
            Self::Forbidden(_) => (StatusCode::FORBIDDEN, 403),
            _ => (StatusCode::BAD_REQUEST, 400),
        };

        let message = self.to_string();
        (status, Json(ApiResponse::<()>::error(code, message))).into_response()
    }
}
