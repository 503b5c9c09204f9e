use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, ExprTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::model::catalog::ObjectFilter;

pub struct ObjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ObjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Build the conjunctive predicate for a typed list filter.
    ///
    /// Absent fields add no condition. The name search lowers both sides so
    /// the substring match is case-insensitive on every backend.
    fn filter_condition(filter: &ObjectFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(object_type) = filter.object_type {
            condition = condition
                .add(entity::astronomical_object::Column::ObjectType.eq(object_type.as_str()));
        }

        if let Some(habitable) = filter.habitable {
            condition =
                condition.add(entity::astronomical_object::Column::IsHabitable.eq(habitable));
        }

        if let Some(search) = filter.search.as_deref() {
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col(
                    entity::astronomical_object::Column::Name,
                )))
                .like(format!("%{}%", search.to_lowercase())),
            );
        }

        condition
    }

    /// List objects matching the filter, sorted by name ascending
    pub async fn list(
        &self,
        filter: &ObjectFilter,
    ) -> Result<Vec<entity::astronomical_object::Model>, DbErr> {
        entity::prelude::AstronomicalObject::find()
            .filter(Self::filter_condition(filter))
            .order_by_asc(entity::astronomical_object::Column::Name)
            .all(self.db)
            .await
    }

    /// Get a single object by its id
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::astronomical_object::Model>, DbErr> {
        entity::prelude::AstronomicalObject::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Get objects by id, unordered
    pub async fn get_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<entity::astronomical_object::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::AstronomicalObject::find()
            .filter(entity::astronomical_object::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Get star detail rows for the provided object ids
    pub async fn get_star_details(
        &self,
        object_ids: Vec<i32>,
    ) -> Result<Vec<entity::star_details::Model>, DbErr> {
        if object_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::StarDetails::find()
            .filter(entity::star_details::Column::ObjectId.is_in(object_ids))
            .all(self.db)
            .await
    }

    /// Count objects matching the filter
    pub async fn count(&self, filter: &ObjectFilter) -> Result<u64, DbErr> {
        entity::prelude::AstronomicalObject::find()
            .filter(Self::filter_condition(filter))
            .count(self.db)
            .await
    }
}
