use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::validation_error, error::AppError};

/// Full profile returned to the owning user. Never carries the password hash.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub avatar: String,
    pub bio: Option<String>,
    pub role: String,
    pub status: String,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Profile update payload. Only these three fields are user-editable.
#[derive(Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

impl ChangePasswordRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();
        if self.old_password.is_empty() {
            messages.push("原密码不能为空");
        }
        if self.new_password.len() < 6 {
            messages.push("新密码长度不能少于6位");
        }
        validation_error(messages)
    }
}
