mod model;
mod server;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, startup, state::AppState};

const DEFAULT_LOG_FILTER: &str = "orchestrator=info,tower_http=info,sqlx=debug";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;

    let router = server::router::router()
        .with_state(AppState::new(db))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
