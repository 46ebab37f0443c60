use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pavilion::Table)
                    .if_not_exists()
                    .col(pk_auto(Pavilion::Id))
                    .col(string_uniq(Pavilion::Name))
                    .col(string_null(Pavilion::Image))
                    .col(timestamp(Pavilion::CreatedAt))
                    .col(timestamp(Pavilion::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pavilion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Pavilion {
    Table,
    Id,
    Name,
    Image,
    CreatedAt,
    UpdatedAt,
}
