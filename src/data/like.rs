//! Like data repository for database operations.
//!
//! A like is a bare join row whose composite primary key (user, target type,
//! target id) is the uniqueness constraint: inserting a duplicate fails at the
//! storage layer, and the service layer maps that violation to the
//! "already liked" business error. There is no check-then-insert window.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use entity::like::LikeTarget;

pub struct LikeRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LikeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a like row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created like
    /// - `Err(DbErr)` - Database error; a unique constraint violation means
    ///   the user already liked this target
    pub async fn create(
        &self,
        user_id: i32,
        target_type: LikeTarget,
        target_id: i32,
    ) -> Result<entity::like::Model, DbErr> {
        entity::like::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            target_type: ActiveValue::Set(target_type),
            target_id: ActiveValue::Set(target_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Deletes a like row.
    ///
    /// # Returns
    /// - `Ok(rows)` - 1 when a like existed and was removed, 0 otherwise
    pub async fn delete(
        &self,
        user_id: i32,
        target_type: LikeTarget,
        target_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Like::delete_many()
            .filter(entity::like::Column::UserId.eq(user_id))
            .filter(entity::like::Column::TargetType.eq(target_type))
            .filter(entity::like::Column::TargetId.eq(target_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether the user has liked the target. Used to personalize the
    /// article detail for authenticated readers.
    pub async fn exists(
        &self,
        user_id: i32,
        target_type: LikeTarget,
        target_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Like::find()
            .filter(entity::like::Column::UserId.eq(user_id))
            .filter(entity::like::Column::TargetType.eq(target_type))
            .filter(entity::like::Column::TargetId.eq(target_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
