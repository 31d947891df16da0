//! Tag data repository for database operations.
//!
//! Tags carry a denormalized `article_count` that the article service adjusts
//! whenever tag links are added or removed inside its transactions.

use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct TagRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every tag, most used first.
    pub async fn get_all(&self) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_desc(entity::tag::Column::ArticleCount)
            .all(self.db)
            .await
    }

    /// Searches tags by name substring, most used first, capped at `limit`.
    pub async fn search(&self, keyword: &str, limit: u64) -> Result<Vec<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.contains(keyword))
            .order_by_desc(entity::tag::Column::ArticleCount)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Fetches the tags matching the given ids. Ids with no tag are skipped,
    /// which doubles as the existence filter for article tag links.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::tag::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Tag::find()
            .filter(entity::tag::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Shifts the denormalized article count of the given tags by `delta`.
    ///
    /// Called with +1 when articles gain a tag link and -1 when they lose one,
    /// inside the same transaction as the link change.
    pub async fn adjust_article_count(&self, ids: &[i32], delta: i32) -> Result<(), DbErr> {
        if ids.is_empty() {
            return Ok(());
        }

        entity::prelude::Tag::update_many()
            .col_expr(
                entity::tag::Column::ArticleCount,
                Expr::col(entity::tag::Column::ArticleCount).add(delta),
            )
            .filter(entity::tag::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
