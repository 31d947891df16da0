use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260712_000001_create_user_table::User, m20260712_000002_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::Id))
                    .col(integer(Article::UserId))
                    .col(string(Article::Title))
                    .col(text_null(Article::Summary))
                    .col(text(Article::Content))
                    .col(text_null(Article::ContentHtml))
                    .col(string_null(Article::CoverImage))
                    .col(integer_null(Article::CategoryId))
                    .col(boolean(Article::IsPublished).default(false))
                    .col(boolean(Article::IsTop).default(false))
                    .col(boolean(Article::IsFeatured).default(false))
                    .col(integer(Article::ViewCount).default(0))
                    .col(integer(Article::LikeCount).default(0))
                    .col(integer(Article::CommentCount).default(0))
                    .col(integer(Article::FavoriteCount).default(0))
                    .col(string_len(Article::ReviewStatus, 16))
                    .col(integer_null(Article::ReviewerId))
                    .col(timestamp_null(Article::ReviewedAt))
                    .col(text_null(Article::ReviewNote))
                    .col(
                        timestamp(Article::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Article::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Article::PublishedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_user_id")
                            .from(Article::Table, Article::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_category_id")
                            .from(Article::Table, Article::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The pending-review queue and the public listing are the two hot
        // filters on this table.
        manager
            .create_index(
                Index::create()
                    .name("idx_article_review_status")
                    .table(Article::Table)
                    .col(Article::ReviewStatus)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_published_at")
                    .table(Article::Table)
                    .col(Article::PublishedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    Id,
    UserId,
    Title,
    Summary,
    Content,
    ContentHtml,
    CoverImage,
    CategoryId,
    IsPublished,
    IsTop,
    IsFeatured,
    ViewCount,
    LikeCount,
    CommentCount,
    FavoriteCount,
    ReviewStatus,
    ReviewerId,
    ReviewedAt,
    ReviewNote,
    CreatedAt,
    UpdatedAt,
    PublishedAt,
}
