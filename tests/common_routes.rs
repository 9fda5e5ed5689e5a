//! Health, readiness and version endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, seeded_store};

#[tokio::test]
async fn health_is_ok() {
    let response = get(build_test_app(seeded_store()), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn ready_reports_backend() {
    let response = get(build_test_app(seeded_store()), "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store"], "memory");
    assert_eq!(json["storeReachable"], true);
}

#[tokio::test]
async fn version_lists_api_groups() {
    let response = get(build_test_app(seeded_store()), "/version").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "widget-api");
    assert_eq!(json["apiVersions"], serde_json::json!(["v1", "v2"]));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = get(build_test_app(seeded_store()), "/api/v3/widget").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
