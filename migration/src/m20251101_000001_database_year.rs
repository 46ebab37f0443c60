use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DatabaseYear::Table)
                    .if_not_exists()
                    .col(pk_auto(DatabaseYear::Id))
                    .col(integer_uniq(DatabaseYear::Year))
                    .col(boolean(DatabaseYear::IsActive).default(false))
                    .col(timestamp(DatabaseYear::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DatabaseYear::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DatabaseYear {
    Table,
    Id,
    Year,
    IsActive,
    CreatedAt,
}
