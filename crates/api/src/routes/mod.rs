pub mod health;
pub mod users;
pub mod vitals;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /vitals                 live feed for every subject
/// /vitals/{user_id}       single subject reading
/// /users                  registered subject profiles (no vitals)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/vitals", vitals::router())
        .nest("/users", users::router())
}
