//! Bookmarks API server.
//!
//! Run from repo root: `cargo run -p bookmarks-server`
//! Configuration comes from the environment (a `.env` file is honored).

use bookmarks_api::{
    build_router, ensure_bookmarks_table, ensure_database_exists, ApiConfig, AppState,
    PgBookmarkStore,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("bookmarks_api=info,bookmarks_server=info,tower_http=info")
            }),
        )
        .init();

    let config = ApiConfig::from_env()?;
    if config.auto_create_schema {
        ensure_database_exists(&config.database_url).await?;
    }
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    if config.auto_create_schema {
        ensure_bookmarks_table(&pool).await?;
    }

    let listen_addr = config.listen_addr.clone();
    let base_path = config.base_path.clone();
    let state = AppState::new(PgBookmarkStore::new(pool), config);
    let app = build_router(state);

    let listener = TcpListener::bind(&listen_addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        base_path = %base_path,
        "bookmarks API listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
