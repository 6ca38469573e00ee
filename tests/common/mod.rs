// SPDX-License-Identifier: MIT

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use bluecarbon_registry::config::Config;
use bluecarbon_registry::routes::create_router;
use bluecarbon_registry::services::seed::load_demo_data;
use bluecarbon_registry::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app: open login policy, zero ledger latency, empty store.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_app_with_config(Config::test_default())
}

/// Create a test app preloaded with the demo dataset.
#[allow(dead_code)]
pub fn create_seeded_app() -> (axum::Router, Arc<AppState>) {
    let (router, state) = create_app_with_config(Config::test_default());
    load_demo_data(&state.store);
    (router, state)
}

#[allow(dead_code)]
pub fn create_app_with_config(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::from_config(config));
    (create_router(state.clone()), state)
}

/// Log in with demo credentials and return the bearer token.
#[allow(dead_code)]
pub async fn login_token(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/login",
            None,
            serde_json::json!({"email": "demo@bluecarbon.org", "password": "password"}),
        ))
        .await
        .unwrap();
    assert!(
        response.status().is_success(),
        "login failed: {}",
        response.status()
    );

    let body = body_json(response).await;
    body["token"].as_str().expect("token in response").to_string()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    request("GET", uri, token, None)
}

#[allow(dead_code)]
pub fn post_json(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    request("POST", uri, token, Some(body))
}

#[allow(dead_code)]
pub fn post_empty(uri: &str, token: Option<&str>) -> Request<Body> {
    request("POST", uri, token, None)
}

#[allow(dead_code)]
pub fn patch_json(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    request("PATCH", uri, token, Some(body))
}

#[allow(dead_code)]
pub fn put_json(uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    request("PUT", uri, token, Some(body))
}

#[allow(dead_code)]
fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
