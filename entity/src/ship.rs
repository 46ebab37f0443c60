use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub shipping_line: String,
    pub pavilion_id: Option<i32>,
    pub image: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pavilion::Entity",
        from = "Column::PavilionId",
        to = "super::pavilion::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Pavilion,
    #[sea_orm(has_many = "super::manifest_entry::Entity")]
    ManifestEntry,
}

impl Related<super::pavilion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pavilion.def()
    }
}

impl Related<super::manifest_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ManifestEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
