//! Sample rows for local development.

use super::{Change, StoreBackend, WidgetStore};
use crate::entity::Widget;
use crate::error::StoreError;
use uuid::Uuid;

pub fn sample_widgets() -> Vec<Widget> {
    [
        ("Cog", "Square"),
        ("Gear", "Round"),
        ("Sprocket", "Octagonal"),
        ("Pinion", "Triangular"),
    ]
    .into_iter()
    .map(|(name, shape)| Widget::new(Uuid::new_v4(), name, Some(shape.to_string())))
    .collect()
}

/// Insert the sample widgets when the store is the in-memory engine and holds no rows.
/// Returns the number of rows inserted.
pub async fn seed_if_empty(store: &dyn WidgetStore) -> Result<usize, StoreError> {
    if store.backend() != StoreBackend::Memory {
        return Ok(0);
    }
    if !store.is_empty().await? {
        return Ok(0);
    }
    let changes: Vec<Change> = sample_widgets().into_iter().map(Change::Insert).collect();
    store.commit(&changes).await?;
    tracing::info!(count = changes.len(), "seeded sample widgets");
    Ok(changes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryWidgetStore;

    #[tokio::test]
    async fn seeds_empty_memory_store_once() {
        let store = MemoryWidgetStore::new();
        assert_eq!(seed_if_empty(&store).await.unwrap(), 4);
        assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
        let names: Vec<String> = store.list().await.unwrap().into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["Cog", "Gear", "Pinion", "Sprocket"]);
    }

    #[tokio::test]
    async fn leaves_populated_store_alone() {
        let store = MemoryWidgetStore::with_widgets([Widget::new(Uuid::new_v4(), "Flange", None)]);
        assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
        assert_eq!(store.len().await, 1);
    }
}
