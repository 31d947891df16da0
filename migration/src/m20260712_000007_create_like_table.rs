use sea_orm_migration::{prelude::*, schema::*};

use super::m20260712_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite primary key doubles as the at-most-one-like-per-target
        // constraint. A duplicate insert fails here rather than being checked
        // in application code.
        manager
            .create_table(
                Table::create()
                    .table(Like::Table)
                    .if_not_exists()
                    .col(integer(Like::UserId))
                    .col(string_len(Like::TargetType, 16))
                    .col(integer(Like::TargetId))
                    .col(
                        timestamp(Like::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_like")
                            .col(Like::UserId)
                            .col(Like::TargetType)
                            .col(Like::TargetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_user_id")
                            .from(Like::Table, Like::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Like::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Like {
    Table,
    UserId,
    TargetType,
    TargetId,
    CreatedAt,
}
