use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::validation_error, error::AppError};

/// Create/update payload for an article.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRequest {
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub category_id: Option<i32>,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
    /// Draft vs. published; review status is decided server-side.
    #[serde(default)]
    pub is_published: bool,
}

impl ArticleRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut messages = Vec::new();
        if self.title.trim().is_empty() {
            messages.push("标题不能为空");
        }
        if self.content.trim().is_empty() {
            messages.push("内容不能为空");
        }
        validation_error(messages)
    }
}

/// Review decision. A closed enum on the wire: anything other than
/// APPROVE/REJECT fails deserialization with a 400.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewAction {
    Approve,
    Reject,
}

#[derive(Deserialize, ToSchema)]
pub struct ReviewArticleRequest {
    pub action: ReviewAction,
    /// Optional note from the reviewer, stored with the decision.
    pub note: Option<String>,
}

/// Article row in listings: enough for a card, not the full body.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListItemDto {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub cover_image: Option<String>,
    pub author_name: Option<String>,
    pub author_avatar: Option<String>,
    pub category_name: Option<String>,
    pub tag_names: Vec<String>,
    pub view_count: i32,
    pub like_count: i32,
    pub comment_count: i32,
    pub is_top: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i32,
    pub username: String,
    pub nickname: String,
    pub avatar: String,
    pub bio: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CategoryBriefDto {
    pub id: i32,
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TagBriefDto {
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
}

/// Full article payload for the detail page.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetailDto {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub content_html: Option<String>,
    pub cover_image: Option<String>,
    pub is_published: bool,
    pub review_status: String,
    pub view_count: i32,
    pub like_count: i32,
    pub comment_count: i32,
    pub favorite_count: i32,
    pub author: Option<AuthorDto>,
    pub category: Option<CategoryBriefDto>,
    pub tags: Vec<TagBriefDto>,
    /// Whether the requesting user has liked this article. Always false for
    /// anonymous requests.
    pub is_liked: bool,
    pub is_favorited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}
