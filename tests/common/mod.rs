#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use widget_api::{app, AppConfig, AppState, MemoryWidgetStore, RetryPolicy, Widget, WidgetStore};

pub const ID1: &str = "076d3b78-7789-40ea-a3cf-0a5b11dab0a9";
pub const ID2: &str = "534ad860-bde2-4f35-a56d-b05723d68525";
pub const ID3: &str = "0c7f2632-d4cc-4e88-81a1-4af34297e605";

pub fn id(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap()
}

/// Retries stay enabled but back off for a millisecond so tests remain fast.
pub fn test_retry() -> RetryPolicy {
    RetryPolicy::default()
        .with_base_delay(Duration::from_millis(1))
        .with_max_delay(Duration::from_millis(5))
}

/// Build the full application router, with the same layers production uses, over `store`.
pub fn build_test_app(store: Arc<dyn WidgetStore>) -> Router {
    let state = AppState::new(store, test_retry());
    app(state, &AppConfig::default())
}

/// Three widgets named Sprocket, Cog and Gear (deliberately not in name order).
pub fn seeded_store() -> Arc<MemoryWidgetStore> {
    Arc::new(MemoryWidgetStore::with_widgets([
        Widget::new(id(ID1), "Sprocket", Some("Octagonal".into())),
        Widget::new(id(ID2), "Cog", Some("Square".into())),
        Widget::new(id(ID3), "Gear", Some("Round".into())),
    ]))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
