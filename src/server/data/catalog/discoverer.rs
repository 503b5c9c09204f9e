use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

pub struct DiscovererRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscovererRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all discoverers sorted by name ascending
    pub async fn list(&self) -> Result<Vec<entity::discoverer::Model>, DbErr> {
        entity::prelude::Discoverer::find()
            .order_by_asc(entity::discoverer::Column::Name)
            .all(self.db)
            .await
    }

    /// Get every discovery/discoverer join row, unordered
    pub async fn all_links(&self) -> Result<Vec<entity::discovery_discoverer::Model>, DbErr> {
        entity::prelude::DiscoveryDiscoverer::find()
            .all(self.db)
            .await
    }

    /// Count discoverer rows
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Discoverer::find().count(self.db).await
    }
}
