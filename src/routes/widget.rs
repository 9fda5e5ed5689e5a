//! Widget routes, one router per API version.

use crate::handlers::widget::{create, delete, list, read, update};
use crate::state::AppState;
use crate::version::{WidgetVersion, V1, V2};
use axum::{routing::get, Router};

/// `GET|POST|PUT /` and `GET|DELETE /:id`, to be nested under the version's prefix.
pub fn widget_routes<V: WidgetVersion>(state: AppState) -> Router {
    Router::new()
        .route("/", get(list::<V>).post(create::<V>).put(update::<V>))
        .route("/:id", get(read::<V>).delete(delete::<V>))
        .with_state(state)
}

/// Both API versions, each nested at its declared prefix.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest(V1::VERSION.route_prefix(), widget_routes::<V1>(state.clone()))
        .nest(V2::VERSION.route_prefix(), widget_routes::<V2>(state))
}
