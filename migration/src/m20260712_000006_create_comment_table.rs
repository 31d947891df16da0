use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260712_000001_create_user_table::User, m20260712_000004_create_article_table::Article,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(integer(Comment::ArticleId))
                    .col(integer(Comment::UserId))
                    .col(integer_null(Comment::ParentId))
                    .col(integer_null(Comment::ReplyToId))
                    .col(text(Comment::Content))
                    .col(integer(Comment::LikeCount).default(0))
                    .col(string_len(Comment::Status, 16))
                    .col(
                        timestamp(Comment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_article_id")
                            .from(Comment::Table, Comment::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_user_id")
                            .from(Comment::Table, Comment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comment_article_id")
                    .table(Comment::Table)
                    .col(Comment::ArticleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    ArticleId,
    UserId,
    ParentId,
    ReplyToId,
    Content,
    LikeCount,
    Status,
    CreatedAt,
}
