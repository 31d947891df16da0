//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::{
    api::PageDto,
    comment::{CommentDto, CommentRequest},
};

/// Comment enriched with the author's display data.
#[derive(Debug, Clone)]
pub struct Comment {
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

impl Comment {
    /// Builds a domain comment from the entity row and its author, when the
    /// author still exists.
    pub fn from_entity(
        entity: entity::comment::Model,
        author: Option<&entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            article_id: entity.article_id,
            user_id: entity.user_id,
            author_name: author.map(|u| u.nickname.clone()),
            author_avatar: author.map(|u| u.avatar.clone()),
            parent_id: entity.parent_id,
            reply_to_id: entity.reply_to_id,
            content: entity.content,
            like_count: entity.like_count,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            article_id: self.article_id,
            user_id: self.user_id,
            author_name: self.author_name,
            author_avatar: self.author_avatar,
            parent_id: self.parent_id,
            reply_to_id: self.reply_to_id,
            content: self.content,
            like_count: self.like_count,
            created_at: self.created_at,
        }
    }
}

/// Parameters for posting a comment.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub article_id: i32,
    pub content: String,
    pub parent_id: Option<i32>,
    pub reply_to_id: Option<i32>,
}

impl From<CommentRequest> for CreateCommentParams {
    fn from(dto: CommentRequest) -> Self {
        Self {
            article_id: dto.article_id,
            content: dto.content,
            parent_id: dto.parent_id,
            reply_to_id: dto.reply_to_id,
        }
    }
}

/// Paginated collection of comments with metadata.
#[derive(Debug, Clone)]
pub struct PaginatedComments {
    pub records: Vec<Comment>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
}

impl PaginatedComments {
    pub fn into_dto(self) -> PageDto<CommentDto> {
        PageDto::new(
            self.records.into_iter().map(|c| c.into_dto()).collect(),
            self.total,
            self.page,
            self.size,
        )
    }
}
