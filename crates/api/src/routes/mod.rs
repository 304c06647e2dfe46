pub mod applications;
pub mod health;
pub mod portfolio;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/admin` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /applications                     list (GET), bulk delete (DELETE)
/// /applications/{id}/status         update status (PATCH)
/// /applications/shortlist           interview invitations (POST)
/// /applications/send-task           task assignments (POST)
/// ```
pub fn admin_routes() -> Router<AppState> {
    Router::new().nest("/applications", applications::router())
}
