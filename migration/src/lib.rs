pub use sea_orm_migration::prelude::*;

mod m20260712_000001_create_user_table;
mod m20260712_000002_create_category_table;
mod m20260712_000003_create_tag_table;
mod m20260712_000004_create_article_table;
mod m20260712_000005_create_article_tag_table;
mod m20260712_000006_create_comment_table;
mod m20260712_000007_create_like_table;
mod m20260712_000008_create_favorite_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_000001_create_user_table::Migration),
            Box::new(m20260712_000002_create_category_table::Migration),
            Box::new(m20260712_000003_create_tag_table::Migration),
            Box::new(m20260712_000004_create_article_table::Migration),
            Box::new(m20260712_000005_create_article_tag_table::Migration),
            Box::new(m20260712_000006_create_comment_table::Migration),
            Box::new(m20260712_000007_create_like_table::Migration),
            Box::new(m20260712_000008_create_favorite_table::Migration),
        ]
    }
}
