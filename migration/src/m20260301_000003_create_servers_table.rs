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
                    .table(Servers::Table)
                    .if_not_exists()
                    .col(pk_auto(Servers::Id))
                    .col(string(Servers::Name))
                    .col(string(Servers::Url))
                    .col(string(Servers::Token))
                    .col(integer(Servers::UserId))
                    .col(
                        timestamp_with_time_zone(Servers::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Servers::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_servers_user_id")
                            .from(Servers::Table, Servers::UserId)
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
                    .name("idx_servers_user_id")
                    .table(Servers::Table)
                    .col(Servers::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Servers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Servers {
    Table,
    Id,
    Name,
    Url,
    Token,
    UserId,
    CreatedAt,
    UpdatedAt,
}
