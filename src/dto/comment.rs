use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::validation_error, error::AppError};

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub article_id: i32,
    pub content: String,
    /// Root comment of the thread when replying inside one.
    pub parent_id: Option<i32>,
    /// The specific comment being replied to.
    pub reply_to_id: Option<i32>,
}

impl CommentRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();
        if self.content.trim().is_empty() {
            messages.push("评论内容不能为空");
        }
        validation_error(messages)
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub article_id: i32,
    pub user_id: i32,
    pub author_name: Option<String>,
    pub author_avatar: Option<String>,
    pub parent_id: Option<i32>,
    pub reply_to_id: Option<i32>,
    pub content: String,
    pub like_count: i32,
    pub created_at: DateTime<Utc>,
}
