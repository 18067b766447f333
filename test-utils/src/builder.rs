use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables an in-memory test database should start with.
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_resource_tables().build().await?;
/// ```
pub struct TestBuilder {
    /// Created in insertion order, so referenced tables go first.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the SQLite schema of `entity`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues `users`, `dispatchers` and `servers`, owners first.
    pub fn with_resource_tables(self) -> Self {
        self.with_table(User)
            .with_table(Dispatcher)
            .with_table(Server)
    }

    /// Opens the database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready; the session is created lazily
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
