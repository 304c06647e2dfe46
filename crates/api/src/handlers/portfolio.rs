//! Public case-study pages.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use zenith_core::case_studies;

use crate::pages;

/// GET /portfolio
pub async fn index() -> Html<String> {
    Html(pages::case_study::render_index(case_studies::all()))
}

/// GET /portfolio/{slug}
///
/// Unknown slugs get the not-found page with a 404 status.
pub async fn case_study(Path(slug): Path<String>) -> Response {
    match case_studies::find(&slug) {
        Some(study) => Html(pages::case_study::render_detail(study)).into_response(),
        None => {
            tracing::debug!(%slug, "Unknown case study");
            (StatusCode::NOT_FOUND, Html(pages::layout::not_found())).into_response()
        }
    }
}
