use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "discovery_discoverer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub discovery_id: i32,
    pub discoverer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discovery::Entity",
        from = "Column::DiscoveryId",
        to = "super::discovery::Column::Id"
    )]
    Discovery,
    #[sea_orm(
        belongs_to = "super::discoverer::Entity",
        from = "Column::DiscovererId",
        to = "super::discoverer::Column::Id"
    )]
    Discoverer,
}

impl Related<super::discovery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discovery.def()
    }
}

impl Related<super::discoverer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discoverer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
