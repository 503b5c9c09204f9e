use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "astronomical_object")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub object_type: String,
    pub magnitude: Option<f64>,
    pub temperature_kelvin: Option<f64>,
    pub distance_light_years: Option<f64>,
    pub solar_mass: Option<f64>,
    pub is_habitable: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::star_details::Entity")]
    StarDetails,
    #[sea_orm(has_many = "super::discovery::Entity")]
    Discovery,
    #[sea_orm(has_many = "super::observation::Entity")]
    Observation,
    #[sea_orm(has_many = "super::photo::Entity")]
    Photo,
}

impl Related<super::star_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StarDetails.def()
    }
}

impl Related<super::discovery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discovery.def()
    }
}

impl Related<super::observation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Observation.def()
    }
}

impl Related<super::photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
