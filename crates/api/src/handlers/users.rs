//! Handlers for registered subject profiles.

use axum::extract::State;
use axum::Json;
use kavalan_core::subject::SubjectSummary;
use serde::Serialize;

use crate::state::AppState;

/// Response body for `GET /api/users`.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<SubjectSummary>,
}

/// GET /api/users
///
/// Descriptive profile fields only; no coordinates or vitals.
pub async fn list_users(State(state): State<AppState>) -> Json<UsersResponse> {
    Json(UsersResponse {
        users: state.registry.summaries(),
    })
}
