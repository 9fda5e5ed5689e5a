//! Storage backends for widgets: PostgreSQL and an in-memory engine.

mod memory;
mod postgres;
mod retry;
mod seed;

pub use memory::MemoryWidgetStore;
pub use postgres::{ensure_database_exists, ensure_schema, PgWidgetStore};
pub use retry::RetryPolicy;
pub use seed::{sample_widgets, seed_if_empty};

use crate::entity::Widget;
use crate::error::StoreError;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// A staged mutation, applied by [`WidgetStore::commit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change {
    Insert(Widget),
    Update(Widget),
    Remove(Uuid),
}

/// Which engine backs the store. Only the in-memory engine is seeded with sample rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Postgres => f.write_str("postgres"),
            StoreBackend::Memory => f.write_str("memory"),
        }
    }
}

/// Data access over the `widget` table.
#[async_trait]
pub trait WidgetStore: Send + Sync {
    /// All widgets ordered by name ascending.
    async fn list(&self) -> Result<Vec<Widget>, StoreError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Widget>, StoreError>;

    /// Apply all changes as one unit. Nothing is persisted if any change fails.
    async fn commit(&self, changes: &[Change]) -> Result<(), StoreError>;

    async fn is_empty(&self) -> Result<bool, StoreError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;

    fn backend(&self) -> StoreBackend;
}
