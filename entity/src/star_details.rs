use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "star_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub object_id: i32,
    pub spectral_class: Option<String>,
    pub luminosity: Option<f64>,
    pub radius_solar: Option<f64>,
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
