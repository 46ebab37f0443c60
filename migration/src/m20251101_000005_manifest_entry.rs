use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_database_year::DatabaseYear, m20251101_000003_ship::Ship,
    m20251101_000004_container_type::ContainerType,
};

static IDX_MANIFEST_ENTRY_MANIFEST_CONTAINER: &str = "idx-manifest_entry-numar_manifest-container";
static IDX_MANIFEST_ENTRY_DATA_INREGISTRARE: &str = "idx-manifest_entry-data_inregistrare";
static IDX_MANIFEST_ENTRY_NUMAR_CURENT: &str = "idx-manifest_entry-numar_curent";
static FK_MANIFEST_ENTRY_DATABASE_YEAR_ID: &str = "fk-manifest_entry-database_year_id";
static FK_MANIFEST_ENTRY_CONTAINER_TYPE_ID: &str = "fk-manifest_entry-container_type_id";
static FK_MANIFEST_ENTRY_SHIP_ID: &str = "fk-manifest_entry-ship_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ManifestEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(ManifestEntry::Id))
                    .col(integer_null(ManifestEntry::DatabaseYearId))
                    .col(integer(ManifestEntry::NumarCurent).default(0))
                    .col(string_len(ManifestEntry::NumarManifest, 100))
                    .col(string_len(ManifestEntry::NumarPermis, 100))
                    .col(string_len(ManifestEntry::NumarPozitie, 50))
                    .col(string_len(ManifestEntry::CerereOperatiune, 100))
                    .col(date_null(ManifestEntry::DataInregistrare))
                    .col(string_len(ManifestEntry::Container, 50))
                    .col(integer_null(ManifestEntry::NumarColete))
                    .col(double_null(ManifestEntry::GreutateBruta))
                    .col(text(ManifestEntry::DescriereMarfa))
                    .col(string_len(ManifestEntry::TipOperatiune, 1))
                    .col(string_len(ManifestEntry::NumeNava, 200))
                    .col(string_len(ManifestEntry::PavilionNava, 100))
                    .col(string_len_null(ManifestEntry::NumarSumara, 100))
                    .col(string_len(ManifestEntry::TipContainer, 50))
                    .col(string_len(ManifestEntry::LinieMaritima, 200))
                    .col(string_len(ManifestEntry::ModelContainer, 100))
                    .col(text_null(ManifestEntry::Observatii))
                    .col(integer_null(ManifestEntry::ContainerTypeId))
                    .col(integer_null(ManifestEntry::ShipId))
                    .col(timestamp(ManifestEntry::CreatedAt))
                    .col(timestamp(ManifestEntry::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MANIFEST_ENTRY_MANIFEST_CONTAINER)
                    .table(ManifestEntry::Table)
                    .col(ManifestEntry::NumarManifest)
                    .col(ManifestEntry::Container)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MANIFEST_ENTRY_DATA_INREGISTRARE)
                    .table(ManifestEntry::Table)
                    .col(ManifestEntry::DataInregistrare)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MANIFEST_ENTRY_NUMAR_CURENT)
                    .table(ManifestEntry::Table)
                    .col(ManifestEntry::NumarCurent)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MANIFEST_ENTRY_DATABASE_YEAR_ID)
                    .from_tbl(ManifestEntry::Table)
                    .from_col(ManifestEntry::DatabaseYearId)
                    .to_tbl(DatabaseYear::Table)
                    .to_col(DatabaseYear::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MANIFEST_ENTRY_CONTAINER_TYPE_ID)
                    .from_tbl(ManifestEntry::Table)
                    .from_col(ManifestEntry::ContainerTypeId)
                    .to_tbl(ContainerType::Table)
                    .to_col(ContainerType::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MANIFEST_ENTRY_SHIP_ID)
                    .from_tbl(ManifestEntry::Table)
                    .from_col(ManifestEntry::ShipId)
                    .to_tbl(Ship::Table)
                    .to_col(Ship::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_MANIFEST_ENTRY_SHIP_ID,
            FK_MANIFEST_ENTRY_CONTAINER_TYPE_ID,
            FK_MANIFEST_ENTRY_DATABASE_YEAR_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(ManifestEntry::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(ManifestEntry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ManifestEntry {
    Table,
    Id,
    DatabaseYearId,
    NumarCurent,
    NumarManifest,
    NumarPermis,
    NumarPozitie,
    CerereOperatiune,
    DataInregistrare,
    Container,
    NumarColete,
    GreutateBruta,
    DescriereMarfa,
    TipOperatiune,
    NumeNava,
    PavilionNava,
    NumarSumara,
    TipContainer,
    LinieMaritima,
    ModelContainer,
    Observatii,
    ContainerTypeId,
    ShipId,
    CreatedAt,
    UpdatedAt,
}
