use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_pavilion::Pavilion;

static FK_SHIP_PAVILION_ID: &str = "fk-ship-pavilion_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ship::Table)
                    .if_not_exists()
                    .col(pk_auto(Ship::Id))
                    .col(string_uniq(Ship::Name))
                    .col(string(Ship::ShippingLine))
                    .col(integer_null(Ship::PavilionId))
                    .col(string_null(Ship::Image))
                    .col(text(Ship::Description))
                    .col(timestamp(Ship::CreatedAt))
                    .col(timestamp(Ship::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHIP_PAVILION_ID)
                    .from_tbl(Ship::Table)
                    .from_col(Ship::PavilionId)
                    .to_tbl(Pavilion::Table)
                    .to_col(Pavilion::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHIP_PAVILION_ID)
                    .table(Ship::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ship {
    Table,
    Id,
    Name,
    ShippingLine,
    PavilionId,
    Image,
    Description,
    CreatedAt,
    UpdatedAt,
}
