//! Comment data repository for database operations.
//!
//! Comments are soft-deleted: deletion flips the lifecycle status to Deleted
//! and listings filter on Active, so reply chains keep their anchors.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::comment::CreateCommentParams;
use entity::comment::CommentStatus;

/// A comment row paired with its author, when the author still exists.
pub type CommentWithAuthor = (entity::comment::Model, Option<entity::user::Model>);

pub struct CommentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active comment.
    pub async fn create(
        &self,
        user_id: i32,
        params: &CreateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            article_id: ActiveValue::Set(params.article_id),
            user_id: ActiveValue::Set(user_id),
            parent_id: ActiveValue::Set(params.parent_id),
            reply_to_id: ActiveValue::Set(params.reply_to_id),
            content: ActiveValue::Set(params.content.clone()),
            like_count: ActiveValue::Set(0),
            status: ActiveValue::Set(CommentStatus::Active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a comment by primary key, regardless of lifecycle status.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id).one(self.db).await
    }

    /// Gets a page of active comments for an article, newest first.
    pub async fn get_page_by_article(
        &self,
        article_id: i32,
        page: u64,
        size: u64,
    ) -> Result<(Vec<CommentWithAuthor>, u64), DbErr> {
        let paginator = entity::prelude::Comment::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .filter(entity::comment::Column::Status.eq(CommentStatus::Active))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .paginate(self.db, size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((rows, total))
    }

    /// Soft-deletes an already-fetched comment by moving it to the Deleted
    /// state. The row itself stays.
    pub async fn soft_delete(
        &self,
        comment: entity::comment::Model,
    ) -> Result<entity::comment::Model, DbErr> {
        let mut active: entity::comment::ActiveModel = comment.into();
        active.status = ActiveValue::Set(CommentStatus::Deleted);
        active.update(self.db).await
    }

    /// Bumps the like counter.
    pub async fn increment_like_count(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::update_many()
            .col_expr(
                entity::comment::Column::LikeCount,
                Expr::col(entity::comment::Column::LikeCount).add(1),
            )
            .filter(entity::comment::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Decrements the like counter, never below zero.
    pub async fn decrement_like_count(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::update_many()
            .col_expr(
                entity::comment::Column::LikeCount,
                Expr::col(entity::comment::Column::LikeCount).sub(1),
            )
            .filter(entity::comment::Column::Id.eq(id))
            .filter(entity::comment::Column::LikeCount.gt(0))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
