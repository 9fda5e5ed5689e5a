//! In-memory widget store. Used for local development and tests.

use super::{Change, StoreBackend, WidgetStore};
use crate::entity::Widget;
use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryWidgetStore {
    rows: RwLock<HashMap<Uuid, Widget>>,
}

impl MemoryWidgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_widgets(widgets: impl IntoIterator<Item = Widget>) -> Self {
        let rows = widgets.into_iter().map(|w| (w.id, w)).collect();
        Self { rows: RwLock::new(rows) }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl WidgetStore for MemoryWidgetStore {
    async fn list(&self) -> Result<Vec<Widget>, StoreError> {
        let rows = self.rows.read().await;
        let mut out: Vec<Widget> = rows.values().cloned().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Widget>, StoreError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn commit(&self, changes: &[Change]) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        // Work on a copy so a failing change leaves the table untouched.
        let mut next = rows.clone();
        for change in changes {
            match change {
                Change::Insert(w) => {
                    if next.contains_key(&w.id) {
                        return Err(StoreError::DuplicateKey(w.id));
                    }
                    next.insert(w.id, w.clone());
                }
                Change::Update(w) => match next.get_mut(&w.id) {
                    Some(row) => *row = w.clone(),
                    None => return Err(StoreError::Missing(w.id)),
                },
                Change::Remove(id) => {
                    if next.remove(id).is_none() {
                        return Err(StoreError::Missing(*id));
                    }
                }
            }
        }
        *rows = next;
        Ok(())
    }

    async fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.rows.read().await.is_empty())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }
}
