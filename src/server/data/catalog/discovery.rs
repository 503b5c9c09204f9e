use sea_orm::{
    sea_query::NullOrdering, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    QueryFilter, QueryOrder,
};

pub struct DiscoveryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscoveryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get discoveries for the provided object ids, earliest first.
    ///
    /// Ordered by discovery date ascending with nulls last, tie-broken by id
    /// ascending, so the first row per object is its primary discovery.
    pub async fn get_by_object_ids_earliest_first(
        &self,
        object_ids: Vec<i32>,
    ) -> Result<Vec<entity::discovery::Model>, DbErr> {
        if object_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Discovery::find()
            .filter(entity::discovery::Column::ObjectId.is_in(object_ids))
            .order_by_with_nulls(
                entity::discovery::Column::DiscoveryDate,
                Order::Asc,
                NullOrdering::Last,
            )
            .order_by_asc(entity::discovery::Column::Id)
            .all(self.db)
            .await
    }

    /// Get all discoveries for one object, most recent first (nulls last,
    /// then id ascending), as rendered in the detail panel
    pub async fn get_by_object_id_latest_first(
        &self,
        object_id: i32,
    ) -> Result<Vec<entity::discovery::Model>, DbErr> {
        entity::prelude::Discovery::find()
            .filter(entity::discovery::Column::ObjectId.eq(object_id))
            .order_by_with_nulls(
                entity::discovery::Column::DiscoveryDate,
                Order::Desc,
                NullOrdering::Last,
            )
            .order_by_asc(entity::discovery::Column::Id)
            .all(self.db)
            .await
    }

    /// Get every discovery row, unordered
    pub async fn all(&self) -> Result<Vec<entity::discovery::Model>, DbErr> {
        entity::prelude::Discovery::find().all(self.db).await
    }

    /// Get discoverer join rows with their discoverer for the provided
    /// discovery ids
    pub async fn get_discoverer_links(
        &self,
        discovery_ids: Vec<i32>,
    ) -> Result<
        Vec<(
            entity::discovery_discoverer::Model,
            Option<entity::discoverer::Model>,
        )>,
        DbErr,
    > {
        if discovery_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::DiscoveryDiscoverer::find()
            .filter(entity::discovery_discoverer::Column::DiscoveryId.is_in(discovery_ids))
            .find_also_related(entity::prelude::Discoverer)
            .all(self.db)
            .await
    }
}
