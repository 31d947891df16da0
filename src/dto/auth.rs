use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::validation_error, error::AppError};

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Rejects blank credentials before any database work happens.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();
        if self.username.trim().is_empty() {
            messages.push("用户名不能为空");
        }
        if self.password.is_empty() {
            messages.push("密码不能为空");
        }
        validation_error(messages)
    }
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    /// Optional display name; defaults to the username when absent.
    pub nickname: Option<String>,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();
        if self.username.trim().is_empty() {
            messages.push("用户名不能为空");
        }
        if self.password.len() < 6 {
            messages.push("密码长度不能少于6位");
        }
        if !self.email.contains('@') {
            messages.push("邮箱格式不正确");
        }
        validation_error(messages)
    }
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Login and refresh response carrying both tokens and the user's profile.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Short-lived access token sent as `Authorization: Bearer <token>`.
    pub access_token: String,
    /// Long-lived refresh token accepted only by the refresh endpoint.
    pub refresh_token: String,
    pub user: UserInfoDto,
}

/// Profile subset embedded in login responses.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserInfoDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub avatar: String,
    pub role: String,
}
