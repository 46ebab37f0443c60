use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContainerType::Table)
                    .if_not_exists()
                    .col(pk_auto(ContainerType::Id))
                    .col(string_uniq(ContainerType::ModelContainer))
                    .col(string(ContainerType::TipContainer))
                    .col(string_null(ContainerType::Image))
                    .col(text(ContainerType::Description))
                    .col(timestamp(ContainerType::CreatedAt))
                    .col(timestamp(ContainerType::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContainerType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ContainerType {
    Table,
    Id,
    ModelContainer,
    TipContainer,
    Image,
    Description,
    CreatedAt,
    UpdatedAt,
}
