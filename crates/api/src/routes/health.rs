use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Public service name reported at `/`.
pub const SERVICE_NAME: &str = "Kavalan Sentinel API";

/// Mission statement reported at `/`.
pub const SERVICE_MISSION: &str = "Women's Bio-Safety Grid — Zero Network Wearable SOS";

/// Endpoint paths advertised at `/`.
pub const ADVERTISED_ENDPOINTS: [&str; 3] = ["/api/vitals", "/api/vitals/{user_id}", "/api/users"];

/// Service metadata payload.
#[derive(Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub mission: &'static str,
    pub status: &'static str,
    pub endpoints: [&'static str; 3],
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of monitored subjects.
    pub subjects: usize,
}

/// GET / -- service name, version, mission and available endpoints.
async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        mission: SERVICE_MISSION,
        status: "operational",
        endpoints: ADVERTISED_ENDPOINTS,
    })
}

/// GET /health -- liveness probe.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        subjects: state.registry.len(),
    })
}

/// Mount root-level routes (NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
}
