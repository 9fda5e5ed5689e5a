//! Shared application state for all routes.

use crate::service::WidgetGateway;
use crate::store::{RetryPolicy, WidgetStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WidgetStore>,
    pub retry: RetryPolicy,
}

impl AppState {
    pub fn new(store: Arc<dyn WidgetStore>, retry: RetryPolicy) -> Self {
        Self { store, retry }
    }

    /// A fresh unit of work for one request.
    pub fn gateway(&self) -> WidgetGateway {
        WidgetGateway::new(self.store.clone(), self.retry)
    }
}
