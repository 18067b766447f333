use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Inactivity window applied to every test session.
const TEST_SESSION_INACTIVITY_DAYS: i64 = 7;

/// Isolated test environment backed by an in-memory SQLite database.
///
/// The database is opened on first use. Sessions are stored in the same database through
/// `tower_sessions_sqlx_store::SqliteStore`, mirroring the production setup where the API
/// and the login service share one session table.
pub struct TestContext {
    /// Connection to the in-memory database, opened by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Default session, created by `session()`.
    pub session: Option<Session>,

    /// Session store shared by every session handed out by this context.
    store: Option<Arc<SqliteStore>>,
}

impl TestContext {
    /// Creates an empty test context; nothing is connected yet.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
            store: None,
        }
    }

    /// Gets the in-memory database connection, opening it on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to open the in-memory database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        Ok(self.db.as_ref().unwrap())
    }

    /// Executes CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements, referenced tables first
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets the default session, creating it (and the session table) on first call.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the default session
    /// - `Err(TestError::Database)` - Failed to prepare the session store
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let session = self.new_session().await?;
            self.session = Some(session);
        }

        Ok(self.session.as_ref().unwrap())
    }

    /// Creates a session independent from the default one.
    ///
    /// Use this to act as several principals within one test: each session can hold a
    /// different authenticated user.
    ///
    /// # Returns
    /// - `Ok(Session)` - A fresh, empty session on the shared store
    /// - `Err(TestError::Database)` - Failed to prepare the session store
    pub async fn new_session(&mut self) -> Result<Session, TestError> {
        let store = self.store().await?;

        Ok(Session::new(
            None,
            store,
            Some(Expiry::OnInactivity(Duration::days(
                TEST_SESSION_INACTIVITY_DAYS,
            ))),
        ))
    }

    /// Gets both the database and the default session.
    ///
    /// Avoids holding a mutable borrow of the context while using both.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - References to both
    /// - `Err(TestError::Database)` - Failed to initialize either
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }

    async fn store(&mut self) -> Result<Arc<SqliteStore>, TestError> {
        if let Some(store) = &self.store {
            return Ok(store.clone());
        }

        let pool = self.database().await?.get_sqlite_connection_pool().clone();
        let store = SqliteStore::new(pool);
        store
            .migrate()
            .await
            .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

        let store = Arc::new(store);
        self.store = Some(store.clone());

        Ok(store)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
