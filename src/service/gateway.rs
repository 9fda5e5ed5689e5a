//! Per-request unit of work over a [`WidgetStore`].

use crate::entity::Widget;
use crate::error::StoreError;
use crate::store::{Change, RetryPolicy, WidgetStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Reads go straight to the store; writes are staged and persisted by [`WidgetGateway::commit`].
/// Every store call runs under the retry policy.
pub struct WidgetGateway {
    store: Arc<dyn WidgetStore>,
    retry: RetryPolicy,
    pending: Vec<Change>,
}

impl WidgetGateway {
    pub fn new(store: Arc<dyn WidgetStore>, retry: RetryPolicy) -> Self {
        Self {
            store,
            retry,
            pending: Vec::new(),
        }
    }

    /// All widgets ordered by name ascending.
    pub async fn list(&self) -> Result<Vec<Widget>, StoreError> {
        let store = &self.store;
        self.retry.run("list", move || store.list()).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Widget>, StoreError> {
        let store = &self.store;
        self.retry.run("get_by_id", move || store.get_by_id(id)).await
    }

    pub fn insert(&mut self, widget: Widget) {
        self.pending.push(Change::Insert(widget));
    }

    pub fn update(&mut self, widget: Widget) {
        self.pending.push(Change::Update(widget));
    }

    pub fn remove(&mut self, widget: &Widget) {
        self.pending.push(Change::Remove(widget.id));
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Persist staged changes. Returns how many were applied; pending changes are cleared only on success.
    ///
    /// A transient failure can hide a write that did land. When the retry then trips over its own
    /// earlier insert or delete, the store is checked and the commit counts as applied if every
    /// staged change is already visible.
    pub async fn commit(&mut self) -> Result<usize, StoreError> {
        if self.pending.is_empty() {
            return Ok(0);
        }
        let store = &self.store;
        let pending = &self.pending;
        let interrupted = AtomicBool::new(false);
        let flag = &interrupted;
        let outcome = self
            .retry
            .run("commit", move || async move {
                let result = store.commit(pending).await;
                if matches!(&result, Err(e) if e.is_transient()) {
                    flag.store(true, Ordering::SeqCst);
                }
                result
            })
            .await;
        match outcome {
            Ok(()) => {}
            Err(e @ (StoreError::DuplicateKey(_) | StoreError::Missing(_))) if interrupted.load(Ordering::SeqCst) => {
                if !self.already_applied().await? {
                    return Err(e);
                }
                tracing::warn!(error = %e, "commit acknowledgement was lost; changes are already stored");
            }
            Err(e) => return Err(e),
        }
        let applied = self.pending.len();
        self.pending.clear();
        tracing::debug!(applied, "committed widget changes");
        Ok(applied)
    }

    async fn already_applied(&self) -> Result<bool, StoreError> {
        for change in &self.pending {
            let visible = match change {
                Change::Insert(w) | Change::Update(w) => self.get_by_id(w.id).await?.as_ref() == Some(w),
                Change::Remove(id) => self.get_by_id(*id).await?.is_none(),
            };
            if !visible {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
