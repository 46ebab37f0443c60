use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthUser::Id))
                    .col(string_uniq(AuthUser::Username))
                    .col(string(AuthUser::PasswordHash))
                    .col(boolean(AuthUser::IsStaff).default(false))
                    .col(timestamp(AuthUser::CreatedAt))
                    .col(timestamp_null(AuthUser::LastLogin))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuthUser {
    Table,
    Id,
    Username,
    PasswordHash,
    IsStaff,
    CreatedAt,
    LastLogin,
}
