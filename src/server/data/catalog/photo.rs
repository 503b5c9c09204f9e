use sea_orm::{
    sea_query::NullOrdering, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    QueryFilter, QueryOrder,
};

pub struct PhotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get photos for the provided object ids, primary-first.
    ///
    /// Ordered by the primary flag descending, then taken date descending
    /// with nulls last, then id ascending. The first row per object is its
    /// primary photo; the full ordering is what the detail gallery renders.
    pub async fn get_by_object_ids_primary_first(
        &self,
        object_ids: Vec<i32>,
    ) -> Result<Vec<entity::photo::Model>, DbErr> {
        if object_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Photo::find()
            .filter(entity::photo::Column::ObjectId.is_in(object_ids))
            .order_by_desc(entity::photo::Column::IsPrimary)
            .order_by_with_nulls(
                entity::photo::Column::TakenDate,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_asc(entity::photo::Column::Id)
            .all(self.db)
            .await
    }
}
