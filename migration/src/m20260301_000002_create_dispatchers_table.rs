use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dispatchers::Table)
                    .if_not_exists()
                    .col(pk_auto(Dispatchers::Id))
                    .col(string(Dispatchers::Name))
                    .col(string(Dispatchers::Url))
                    .col(string(Dispatchers::Token))
                    .col(integer(Dispatchers::UserId))
                    .col(
                        timestamp_with_time_zone(Dispatchers::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Dispatchers::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dispatchers_user_id")
                            .from(Dispatchers::Table, Dispatchers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dispatchers_user_id")
                    .table(Dispatchers::Table)
                    .col(Dispatchers::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dispatchers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dispatchers {
    Table,
    Id,
    Name,
    Url,
    Token,
    UserId,
    CreatedAt,
    UpdatedAt,
}
