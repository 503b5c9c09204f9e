use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "observation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub object_id: i32,
    pub observatory_id: i32,
    pub observation_date: Option<DateTime>,
    pub instrument: Option<String>,
    pub wavelength: Option<String>,
    pub exposure_time: Option<f64>,
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
    #[sea_orm(
        belongs_to = "super::observatory::Entity",
        from = "Column::ObservatoryId",
        to = "super::observatory::Column::Id"
    )]
    Observatory,
}

impl Related<super::astronomical_object::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AstronomicalObject.def()
    }
}

impl Related<super::observatory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Observatory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
