//! Category data repository for database operations.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct CategoryRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every category in display order.
    pub async fn get_all_ordered(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::SortOrder)
            .all(self.db)
            .await
    }

    /// Finds a category by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Fetches the categories matching the given ids in one query. Used to
    /// enrich article listings without a query per row.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::category::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }
}
