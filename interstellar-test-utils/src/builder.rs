//! Declarative test builder.
//!
//! Configuration methods are chained and executed during the final `build()`
//! call, which creates the requested tables in an in-memory SQLite database.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
        }
    }

    /// Add the full catalog schema to the test database: objects, star
    /// details, discoveries, discoverers, the discovery/discoverer join
    /// table, observatories, observations, and photos.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// ```no_run
    /// use interstellar_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), interstellar_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AstronomicalObject)
    ///     .with_table(Photo)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context with all configured tables created.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AstronomicalObject),
                schema.create_table_from_entity(entity::prelude::StarDetails),
                schema.create_table_from_entity(entity::prelude::Discovery),
                schema.create_table_from_entity(entity::prelude::Discoverer),
                schema.create_table_from_entity(entity::prelude::DiscoveryDiscoverer),
                schema.create_table_from_entity(entity::prelude::Observatory),
                schema.create_table_from_entity(entity::prelude::Observation),
                schema.create_table_from_entity(entity::prelude::Photo),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builder_creates_catalog_tables() {
        let result = TestBuilder::new().with_catalog_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn builder_accepts_individual_tables() {
        let result = TestBuilder::new()
            .with_table(entity::prelude::AstronomicalObject)
            .with_table(entity::prelude::Photo)
            .build()
            .await;
        assert!(result.is_ok());
    }
}
