use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "manifest_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub database_year_id: Option<i32>,
    pub numar_curent: i32,
    pub numar_manifest: String,
    pub numar_permis: String,
    pub numar_pozitie: String,
    pub cerere_operatiune: String,
    pub data_inregistrare: Option<Date>,
    pub container: String,
    pub numar_colete: Option<i32>,
    pub greutate_bruta: Option<f64>,
    #[sea_orm(column_type = "Text")]
    pub descriere_marfa: String,
    pub tip_operatiune: String,
    pub nume_nava: String,
    pub pavilion_nava: String,
    pub numar_sumara: Option<String>,
    pub tip_container: String,
    pub linie_maritima: String,
    pub model_container: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub observatii: Option<String>,
    pub container_type_id: Option<i32>,
    pub ship_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::database_year::Entity",
        from = "Column::DatabaseYearId",
        to = "super::database_year::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    DatabaseYear,
    #[sea_orm(
        belongs_to = "super::container_type::Entity",
        from = "Column::ContainerTypeId",
        to = "super::container_type::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    ContainerType,
    #[sea_orm(
        belongs_to = "super::ship::Entity",
        from = "Column::ShipId",
        to = "super::ship::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Ship,
}

impl Related<super::database_year::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DatabaseYear.def()
    }
}

impl Related<super::container_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContainerType.def()
    }
}

impl Related<super::ship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
