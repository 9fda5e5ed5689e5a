//! Widget API: versioned REST CRUD over a single widget table.

pub mod case;
pub mod config;
pub mod dto;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod version;

pub use config::AppConfig;
pub use entity::Widget;
pub use error::{AppError, ConfigError, StoreError};
pub use routes::{api_routes, app, common_routes, widget_routes};
pub use service::{WidgetGateway, ValidationReport};
pub use state::AppState;
pub use store::{
    ensure_database_exists, ensure_schema, seed_if_empty, MemoryWidgetStore, PgWidgetStore, RetryPolicy,
    StoreBackend, WidgetStore,
};
pub use version::{ApiVersion, WidgetVersion, V1, V2};
