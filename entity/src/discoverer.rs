use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "discoverer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub nationality: Option<String>,
    pub birth_year: Option<i32>,
    pub bio: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::discovery_discoverer::Entity")]
    DiscoveryDiscoverer,
}

impl Related<super::discovery_discoverer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscoveryDiscoverer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
