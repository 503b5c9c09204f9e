use crate::TestContext;

pub mod factory;

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { context: self }
    }
}

pub struct CatalogFixtures<'a> {
    pub context: &'a TestContext,
}
