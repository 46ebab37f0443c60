use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "database_year")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub year: i32,
    pub is_active: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::manifest_entry::Entity")]
    ManifestEntry,
}

impl Related<super::manifest_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ManifestEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
