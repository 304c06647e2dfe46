use axum::routing::get;
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Case-study pages mounted at `/portfolio`.
///
/// ```text
/// GET /                -> index
/// GET /{slug}          -> case_study
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(portfolio::index))
        .route("/{slug}", get(portfolio::case_study))
}
