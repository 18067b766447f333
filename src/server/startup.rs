use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the `users`, `dispatchers`
/// and `servers` tables exist before the first request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(config.sql_log_level != log::LevelFilter::Off)
        .sqlx_logging_level(config.sql_log_level);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on the application database.
///
/// Sessions live in the same SQLite file as the resources, which is where the external
/// login service writes the authenticated user. The session table is created if it does
/// not exist yet.
///
/// # Arguments
/// - `db` - Connected database whose pool backs the session store
/// - `config` - Application configuration containing the inactivity window
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            config.session_inactivity_days,
        )));

    Ok(session_layer)
}
