//! Favorite data repository for database operations.
//!
//! Same shape as likes: the composite primary key (user, article) is the
//! at-most-once constraint, enforced by the storage layer.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct FavoriteRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a favorite row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created favorite
    /// - `Err(DbErr)` - Database error; a unique constraint violation means
    ///   the user already favorited this article
    pub async fn create(
        &self,
        user_id: i32,
        article_id: i32,
    ) -> Result<entity::favorite::Model, DbErr> {
        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            article_id: ActiveValue::Set(article_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Deletes a favorite row.
    ///
    /// # Returns
    /// - `Ok(rows)` - 1 when a favorite existed and was removed, 0 otherwise
    pub async fn delete(&self, user_id: i32, article_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::ArticleId.eq(article_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether the user has favorited the article.
    pub async fn exists(&self, user_id: i32, article_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::ArticleId.eq(article_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of the user's favorites, most recently favorited first.
    ///
    /// Returns the raw favorite rows; the article service resolves them to
    /// articles in their favorited order.
    pub async fn get_page_by_user(
        &self,
        user_id: i32,
        page: u64,
        size: u64,
    ) -> Result<(Vec<entity::favorite::Model>, u64), DbErr> {
        let paginator = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .paginate(self.db, size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((rows, total))
    }
}
