//! Article domain models and parameters.
//!
//! The article aggregate carries the review workflow state and the
//! denormalized social counters, so its models distinguish the compact listing
//! row (`ArticleSummary`) from the fully enriched detail (`ArticleDetail`).

use chrono::{DateTime, Utc};
use entity::article::ReviewStatus;

use crate::dto::{
    api::PageDto,
    article::{
        ArticleDetailDto, ArticleListItemDto, ArticleRequest, AuthorDto, CategoryBriefDto,
        ReviewAction, TagBriefDto,
    },
};

/// Wire name for a review status.
pub fn review_status_name(status: &ReviewStatus) -> &'static str {
    match status {
        ReviewStatus::Pending => "PENDING",
        ReviewStatus::Approved => "APPROVED",
        ReviewStatus::Rejected => "REJECTED",
    }
}

/// Outcome a reviewer chose for a pending article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl From<ReviewAction> for ReviewDecision {
    fn from(action: ReviewAction) -> Self {
        match action {
            ReviewAction::Approve => Self::Approve,
            ReviewAction::Reject => Self::Reject,
        }
    }
}

impl ReviewDecision {
    /// The terminal status this decision moves a pending article into.
    pub fn target_status(self) -> ReviewStatus {
        match self {
            Self::Approve => ReviewStatus::Approved,
            Self::Reject => ReviewStatus::Rejected,
        }
    }
}

/// Author/content fields shared by article create and update.
#[derive(Debug, Clone)]
pub struct ArticleParams {
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub category_id: Option<i32>,
    pub tag_ids: Vec<i32>,
    pub is_published: bool,
}

impl From<ArticleRequest> for ArticleParams {
    fn from(dto: ArticleRequest) -> Self {
        Self {
            title: dto.title,
            summary: dto.summary,
            content: dto.content,
            cover_image: dto.cover_image,
            category_id: dto.category_id,
            tag_ids: dto.tag_ids,
            is_published: dto.is_published,
        }
    }
}

/// Filters for the public article listing.
#[derive(Debug, Clone, Default)]
pub struct ArticleQuery {
    pub page: u64,
    pub size: u64,
    pub category_id: Option<i32>,
    pub tag_id: Option<i32>,
    pub keyword: Option<String>,
}

/// Listing row enriched with author, category and tag display data.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
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

impl ArticleSummary {
    /// Builds a summary from an article row and its pre-fetched display data.
    ///
    /// # Arguments
    /// - `article` - The article entity
    /// - `author` - Author entity when the user still exists
    /// - `category_name` - Display name of the category, if any
    /// - `tag_names` - Names of the article's tags
    pub fn from_entity(
        article: entity::article::Model,
        author: Option<&entity::user::Model>,
        category_name: Option<String>,
        tag_names: Vec<String>,
    ) -> Self {
        Self {
            id: article.id,
            title: article.title,
            summary: article.summary,
            cover_image: article.cover_image,
            author_name: author.map(|u| u.nickname.clone()),
            author_avatar: author.map(|u| u.avatar.clone()),
            category_name,
            tag_names,
            view_count: article.view_count,
            like_count: article.like_count,
            comment_count: article.comment_count,
            is_top: article.is_top,
            is_featured: article.is_featured,
            created_at: article.created_at,
            published_at: article.published_at,
        }
    }

    pub fn into_dto(self) -> ArticleListItemDto {
        ArticleListItemDto {
            id: self.id,
            title: self.title,
            summary: self.summary,
            cover_image: self.cover_image,
            author_name: self.author_name,
            author_avatar: self.author_avatar,
            category_name: self.category_name,
            tag_names: self.tag_names,
            view_count: self.view_count,
            like_count: self.like_count,
            comment_count: self.comment_count,
            is_top: self.is_top,
            is_featured: self.is_featured,
            created_at: self.created_at,
            published_at: self.published_at,
        }
    }
}

/// Paginated collection of article summaries with metadata.
#[derive(Debug, Clone)]
pub struct PaginatedArticles {
    pub records: Vec<ArticleSummary>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
}

impl PaginatedArticles {
    pub fn into_dto(self) -> PageDto<ArticleListItemDto> {
        PageDto::new(
            self.records.into_iter().map(|a| a.into_dto()).collect(),
            self.total,
            self.page,
            self.size,
        )
    }
}

/// Fully enriched article for the detail endpoint.
#[derive(Debug, Clone)]
pub struct ArticleDetail {
    pub article: entity::article::Model,
    pub author: Option<entity::user::Model>,
    pub category: Option<entity::category::Model>,
    pub tags: Vec<entity::tag::Model>,
    /// Whether the requesting user liked this article; false when anonymous.
    pub is_liked: bool,
    pub is_favorited: bool,
}

impl ArticleDetail {
    pub fn into_dto(self) -> ArticleDetailDto {
        let article = self.article;
        ArticleDetailDto {
            id: article.id,
            title: article.title,
            summary: article.summary,
            content: article.content,
            content_html: article.content_html,
            cover_image: article.cover_image,
            is_published: article.is_published,
            review_status: review_status_name(&article.review_status).to_string(),
            view_count: article.view_count,
            like_count: article.like_count,
            comment_count: article.comment_count,
            favorite_count: article.favorite_count,
            author: self.author.map(|u| AuthorDto {
                id: u.id,
                username: u.username,
                nickname: u.nickname,
                avatar: u.avatar,
                bio: u.bio,
            }),
            category: self.category.map(|c| CategoryBriefDto {
                id: c.id,
                name: c.name,
                icon: c.icon,
            }),
            tags: self
                .tags
                .into_iter()
                .map(|t| TagBriefDto {
                    id: t.id,
                    name: t.name,
                    color: t.color,
                })
                .collect(),
            is_liked: self.is_liked,
            is_favorited: self.is_favorited,
            created_at: article.created_at,
            updated_at: article.updated_at,
            published_at: article.published_at,
        }
    }
}
