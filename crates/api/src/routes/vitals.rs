//! Route definitions for simulated vitals.

use axum::routing::get;
use axum::Router;

use crate::handlers::vitals;
use crate::state::AppState;

/// Routes mounted at `/api/vitals`.
///
/// ```text
/// GET /               -> list_vitals
/// GET /{user_id}      -> get_subject_vitals
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vitals::list_vitals))
        .route("/{user_id}", get(vitals::get_subject_vitals))
}
