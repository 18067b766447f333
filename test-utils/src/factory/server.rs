//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers owned by a given user.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db, user.id)
///     .name("Primary")
///     .url("http://example.com")
///     .token("secret")
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    url: String,
    token: String,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Server {n}"`
    /// - url: `"http://server-{n}.test"`
    /// - token: `"token-{n}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of an existing user that owns the server
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Server {}", id),
            url: format!("http://server-{}.test", id),
            token: format!("token-{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert (e.g. owner does not exist)
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        let now = Utc::now();
        entity::server::ActiveModel {
            name: ActiveValue::Set(self.name),
            url: ActiveValue::Set(self.url),
            token: ActiveValue::Set(self.token),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values owned by `user_id`.
pub async fn create_server(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db, user_id).build().await
}
