use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

pub struct ObservatoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ObservatoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all observatories sorted by name ascending
    pub async fn list(&self) -> Result<Vec<entity::observatory::Model>, DbErr> {
        entity::prelude::Observatory::find()
            .order_by_asc(entity::observatory::Column::Name)
            .all(self.db)
            .await
    }

    /// Count observatory rows
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Observatory::find().count(self.db).await
    }
}
