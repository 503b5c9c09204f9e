pub use sea_orm_migration::prelude::*;

mod m20260825_000001_astronomical_object;
mod m20260825_000002_star_details;
mod m20260825_000003_discoverer;
mod m20260825_000004_discovery;
mod m20260825_000005_discovery_discoverer;
mod m20260825_000006_observatory;
mod m20260825_000007_observation;
mod m20260825_000008_photo;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260825_000001_astronomical_object::Migration),
            Box::new(m20260825_000002_star_details::Migration),
            Box::new(m20260825_000003_discoverer::Migration),
            Box::new(m20260825_000004_discovery::Migration),
            Box::new(m20260825_000005_discovery_discoverer::Migration),
            Box::new(m20260825_000006_observatory::Migration),
            Box::new(m20260825_000007_observation::Migration),
            Box::new(m20260825_000008_photo::Migration),
        ]
    }
}
