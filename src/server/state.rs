//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Initialized once during startup and cloned for each request via Axum's state
/// extraction. `DatabaseConnection` is a pool, so clones share connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool holding users, resources and sessions.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
