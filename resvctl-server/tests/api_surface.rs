//! API key guard, root redirect, health and docs

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use resvctl_server::{build_router, ApiKey, AppState, Store};

async fn app() -> Router {
    let store = Store::open_in_memory().await.expect("open failed");
    store.migrate().await.expect("migrate failed");
    build_router(AppState::new(store, ApiKey::new("right-key")), false)
}

async fn get(app: &Router, uri: &str, api_key: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder().uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("X-API-Key", key);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn missing_api_key_is_403() {
    let app = app().await;
    for uri in ["/api/customers", "/api/reservations", "/api/customers/1"] {
        let response = get(&app, uri, None).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{}", uri);
        assert_eq!(json_body(response).await["detail"], "Could not validate API key");
    }
}

#[tokio::test]
async fn wrong_api_key_is_403() {
    let app = app().await;
    let response = get(&app, "/api/customers", Some("wrong-key")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn rejected_write_never_reaches_store() {
    let app = app().await;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/customers")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name":"A","phone":"1","email":"a@x.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get(&app, "/api/customers", Some("right-key")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn right_api_key_is_accepted() {
    let app = app().await;
    let response = get(&app, "/api/reservations", Some("right-key")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn root_redirects_to_docs() {
    let app = app().await;
    let response = get(&app, "/", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/docs");
}

#[tokio::test]
async fn health_needs_no_key() {
    let app = app().await;
    let response = get(&app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app().await;
    let response = get(&app, "/api-docs/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc = json_body(response).await;
    assert!(doc["paths"]["/api/customers"].is_object());
    assert!(doc["paths"]["/api/reservations/{id}"].is_object());
}
