use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "discovery")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub object_id: i32,
    pub discovery_date: Option<Date>,
    pub discovery_method: Option<String>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::astronomical_object::Entity",
        from = "Column::ObjectId",
        to = "super::astronomical_object::Column::Id"
    )]
    AstronomicalObject,
    #[sea_orm(has_many = "super::discovery_discoverer::Entity")]
    DiscoveryDiscoverer,
}

impl Related<super::astronomical_object::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AstronomicalObject.def()
    }
}

impl Related<super::discovery_discoverer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscoveryDiscoverer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
