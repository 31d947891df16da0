use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260712_000003_create_tag_table::Tag, m20260712_000004_create_article_table::Article,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArticleTag::Table)
                    .if_not_exists()
                    .col(integer(ArticleTag::ArticleId))
                    .col(integer(ArticleTag::TagId))
                    .col(
                        timestamp(ArticleTag::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_article_tag")
                            .col(ArticleTag::ArticleId)
                            .col(ArticleTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_tag_article_id")
                            .from(ArticleTag::Table, ArticleTag::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_tag_tag_id")
                            .from(ArticleTag::Table, ArticleTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArticleTag {
    Table,
    ArticleId,
    TagId,
    CreatedAt,
}
