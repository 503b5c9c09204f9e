use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "photo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub object_id: i32,
    pub url: String,
    pub caption: Option<String>,
    pub taken_date: Option<Date>,
    pub telescope: Option<String>,
    pub instrument: Option<String>,
    pub wavelength_filter: Option<String>,
    pub is_primary: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::astronomical_object::Entity",
        from = "Column::ObjectId",
        to = "super::astronomical_object::Column::Id"
    )]
    AstronomicalObject,
}

impl Related<super::astronomical_object::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AstronomicalObject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
