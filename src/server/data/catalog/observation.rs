use sea_orm::{
    sea_query::NullOrdering, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    QueryFilter, QueryOrder,
};

pub struct ObservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ObservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get all observations of one object joined with their observatory,
    /// most recent first (nulls last, then id ascending)
    pub async fn get_by_object_id_latest_first(
        &self,
        object_id: i32,
    ) -> Result<
        Vec<(
            entity::observation::Model,
            Option<entity::observatory::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::Observation::find()
            .filter(entity::observation::Column::ObjectId.eq(object_id))
            .find_also_related(entity::prelude::Observatory)
            .order_by_with_nulls(
                entity::observation::Column::ObservationDate,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_asc(entity::observation::Column::Id)
            .all(self.db)
            .await
    }

    /// Get every observation row, unordered
    pub async fn all(&self) -> Result<Vec<entity::observation::Model>, DbErr> {
        entity::prelude::Observation::find().all(self.db).await
    }
}
