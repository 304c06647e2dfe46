//! Route definitions for the job-application admin.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{applications, bulk};
use crate::state::AppState;

/// Application routes mounted at `/api/admin/applications`.
///
/// ```text
/// GET    /                  -> list_applications
/// DELETE /                  -> delete_applications
/// PATCH  /{id}/status       -> update_status
/// POST   /shortlist         -> shortlist
/// POST   /send-task         -> send_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(applications::list_applications).delete(applications::delete_applications),
        )
        .route("/{id}/status", patch(applications::update_status))
        .route("/shortlist", post(bulk::shortlist))
        .route("/send-task", post(bulk::send_task))
}
