//! Widget API server: reads configuration from the environment, prepares the store and serves
//! both API versions.
//!
//! Run from repo root: `cargo run -p widget-server`
//! Use `WIDGET_STORE=memory` to run without PostgreSQL; the in-memory store is seeded with sample widgets.

use std::sync::Arc;
use tokio::net::TcpListener;
use widget_api::{
    app, ensure_database_exists, ensure_schema, seed_if_empty, AppConfig, AppState, MemoryWidgetStore,
    PgWidgetStore, StoreBackend, WidgetStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("widget_api=info,widget_server=info,tower_http=info")
            }),
        )
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn WidgetStore> = match config.backend {
        StoreBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_schema(&pool).await?;
            Arc::new(PgWidgetStore::new(pool))
        }
        StoreBackend::Memory => Arc::new(MemoryWidgetStore::new()),
    };
    seed_if_empty(store.as_ref()).await?;
    tracing::info!(backend = %config.backend, "widget store ready");

    let state = AppState::new(store, config.retry);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, &config)).await?;
    Ok(())
}
