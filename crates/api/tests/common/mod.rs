#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use kavalan_api::config::ServerConfig;
use kavalan_api::router::build_app_router;
use kavalan_api::state::AppState;
use kavalan_core::registry::SubjectRegistry;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses the `*` CORS origin (matching the dev default) and a fixed
/// simulation seed so runs are reproducible.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        simulation_seed: Some(2025),
    }
}

/// Build the full application router with all middleware layers.
///
/// Uses the same [`build_app_router`] as `main.rs`, so integration tests
/// exercise the production middleware stack.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

/// Like [`build_test_app`], with a caller-supplied config.
pub fn build_test_app_with(config: ServerConfig) -> Router {
    let state = AppState::new(config.clone(), SubjectRegistry::sentinel_defaults());
    build_app_router(state, &config)
}

/// Send a GET request to `uri` and return the response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
