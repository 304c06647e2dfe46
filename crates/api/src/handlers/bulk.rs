//! Bulk email actions: shortlist (interview invitation) and send-task.
//!
//! Both answer `{ "success": true }` with `cache-control: no-store` once the
//! contacts were fetched and the statuses written. Individual email failures
//! only show up in the server log.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::CACHE_CONTROL;
use axum::response::IntoResponse;
use axum::Json;
use zenith_core::application::ApplicationStatus;
use zenith_mail::templates::{shortlist_email, task_email};

use crate::bulk::run_bulk_notification;
use crate::error::AppResult;
use crate::requests::{SendTaskRequest, ShortlistRequest};
use crate::response::SuccessResponse;
use crate::state::AppState;

fn no_store(body: SuccessResponse) -> impl IntoResponse {
    ([(CACHE_CONTROL, "no-store")], Json(body))
}

/// POST /api/admin/applications/shortlist
pub async fn shortlist(
    State(state): State<AppState>,
    body: Result<Json<ShortlistRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let details = input.validate()?;

    run_bulk_notification(
        state.store.as_ref(),
        &state.notifier,
        &input.ids,
        ApplicationStatus::Shortlisted,
        |contact, letterhead| shortlist_email(contact, &details, letterhead),
    )
    .await?;

    Ok(no_store(SuccessResponse::OK))
}

/// POST /api/admin/applications/send-task
pub async fn send_task(
    State(state): State<AppState>,
    body: Result<Json<SendTaskRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let details = input.validate()?;

    run_bulk_notification(
        state.store.as_ref(),
        &state.notifier,
        &input.ids,
        ApplicationStatus::TaskSent,
        |contact, letterhead| task_email(contact, &details, letterhead),
    )
    .await?;

    Ok(no_store(SuccessResponse::OK))
}
