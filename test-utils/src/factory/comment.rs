//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::comment::CommentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    article_id: i32,
    user_id: i32,
    content: String,
    parent_id: Option<i32>,
    reply_to_id: Option<i32>,
    status: CommentStatus,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Comment {id}"` where id is auto-incremented
    /// - top-level comment (no parent, no reply target), status Active
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `article_id` - Id of the commented article
    /// - `user_id` - Id of the commenting user
    pub fn new(db: &'a DatabaseConnection, article_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            article_id,
            user_id,
            content: format!("Comment {}", id),
            parent_id: None,
            reply_to_id: None,
            status: CommentStatus::Active,
        }
    }

    /// Sets the comment body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Makes this comment a reply inside the thread rooted at `parent_id`.
    pub fn parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Sets the specific comment being replied to.
    pub fn reply_to_id(mut self, reply_to_id: i32) -> Self {
        self.reply_to_id = Some(reply_to_id);
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: CommentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            article_id: ActiveValue::Set(self.article_id),
            user_id: ActiveValue::Set(self.user_id),
            parent_id: ActiveValue::Set(self.parent_id),
            reply_to_id: ActiveValue::Set(self.reply_to_id),
            content: ActiveValue::Set(self.content),
            like_count: ActiveValue::Set(0),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active top-level comment with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `article_id` - Id of the commented article
/// - `user_id` - Id of the commenting user
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i32,
    user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, article_id, user_id).build().await
}
