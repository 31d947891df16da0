//! Article factory for creating test article entities.
//!
//! Articles require an author, so the factory takes the author's user id up
//! front. Review status and publication state default to the state a freshly
//! submitted draft would have (Pending, unpublished) and can be overridden.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::article::ReviewStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use entity::article::ReviewStatus;
/// use test_utils::factory::article::ArticleFactory;
///
/// let article = ArticleFactory::new(&db, author.id)
///     .title("Hello")
///     .published(true)
///     .review_status(ReviewStatus::Approved)
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    content: String,
    category_id: Option<i32>,
    is_published: bool,
    is_top: bool,
    review_status: ReviewStatus,
    like_count: i32,
    comment_count: i32,
    favorite_count: i32,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {id}"` where id is auto-incremented
    /// - content: `"Test content"`
    /// - unpublished, not pinned, review status Pending, all counters zero
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the authoring user
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Article {}", id),
            content: "Test content".to_string(),
            category_id: None,
            is_published: false,
            is_top: false,
            review_status: ReviewStatus::Pending,
            like_count: 0,
            comment_count: 0,
            favorite_count: 0,
        }
    }

    /// Sets the article title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the article body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the category the article belongs to.
    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets the publication flag. Published articles get a published_at stamp.
    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    /// Pins the article to the top of listings.
    pub fn pinned(mut self, is_top: bool) -> Self {
        self.is_top = is_top;
        self
    }

    /// Sets the review status.
    pub fn review_status(mut self, review_status: ReviewStatus) -> Self {
        self.review_status = review_status;
        self
    }

    /// Sets the denormalized like counter.
    pub fn like_count(mut self, like_count: i32) -> Self {
        self.like_count = like_count;
        self
    }

    /// Sets the denormalized comment counter.
    pub fn comment_count(mut self, comment_count: i32) -> Self {
        self.comment_count = comment_count;
        self
    }

    /// Sets the denormalized favorite counter.
    pub fn favorite_count(mut self, favorite_count: i32) -> Self {
        self.favorite_count = favorite_count;
        self
    }

    /// Builds and inserts the article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        let now = Utc::now();
        entity::article::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            summary: ActiveValue::Set(None),
            content: ActiveValue::Set(self.content),
            content_html: ActiveValue::Set(None),
            cover_image: ActiveValue::Set(None),
            category_id: ActiveValue::Set(self.category_id),
            is_published: ActiveValue::Set(self.is_published),
            is_top: ActiveValue::Set(self.is_top),
            is_featured: ActiveValue::Set(false),
            view_count: ActiveValue::Set(0),
            like_count: ActiveValue::Set(self.like_count),
            comment_count: ActiveValue::Set(self.comment_count),
            favorite_count: ActiveValue::Set(self.favorite_count),
            review_status: ActiveValue::Set(self.review_status),
            reviewer_id: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            review_note: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            published_at: ActiveValue::Set(self.is_published.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unpublished, pending article with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the authoring user
///
/// # Returns
/// - `Ok(entity::article::Model)` - Created article entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_article(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, user_id).build().await
}

/// Creates a published, approved article — the state visible in public listings.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the authoring user
///
/// # Returns
/// - `Ok(entity::article::Model)` - Created article entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_published_article(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, user_id)
        .published(true)
        .review_status(ReviewStatus::Approved)
        .build()
        .await
}
