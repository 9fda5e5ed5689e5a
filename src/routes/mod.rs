//! Routers: common probes and versioned widget endpoints.

mod common;
mod widget;

pub use common::common_routes;
pub use widget::{api_routes, widget_routes};

use crate::config::AppConfig;
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// The full application: probes, both widget API versions, request tracing and a body size limit.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(config.request_body_limit))
        .layer(TraceLayer::new_for_http())
}
