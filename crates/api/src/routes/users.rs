//! Route definitions for subject profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/api/users`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(users::list_users))
}
