//! Tag factory for creating test tag entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tags with customizable fields.
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    article_count: i32,
}

impl<'a> TagFactory<'a> {
    /// Creates a new TagFactory with default values.
    ///
    /// Defaults:
    /// - name: `"tag-{id}"` where id is auto-incremented
    /// - article_count: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("tag-{}", id),
            article_count: 0,
        }
    }

    /// Sets the tag name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the denormalized article count.
    pub fn article_count(mut self, article_count: i32) -> Self {
        self.article_count = article_count;
        self
    }

    /// Builds and inserts the tag entity into the database.
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(None),
            article_count: ActiveValue::Set(self.article_count),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::tag::Model)` - Created tag entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}
