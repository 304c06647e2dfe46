//! Handlers for listing, re-statusing and deleting job applications.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use zenith_core::error::CoreError;
use zenith_core::types::ApplicationId;

use crate::error::{AppError, AppResult};
use crate::requests::{DeleteApplicationsRequest, UpdateStatusRequest};
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

/// GET /api/admin/applications
///
/// All applications, newest first.
pub async fn list_applications(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let applications = state.store.list_all().await?;

    Ok(Json(DataResponse { data: applications }))
}

/// PATCH /api/admin/applications/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    path: Result<Path<ApplicationId>, PathRejection>,
    body: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let Json(input) = body?;
    let status = input.validate()?;

    let application = state
        .store
        .update_status(id, status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Application",
                id: id.to_string(),
            })
        })?;

    tracing::info!(application_id = %id, status = %status, "Application status updated");

    Ok(Json(DataResponse { data: application }))
}

/// DELETE /api/admin/applications
///
/// Removes every listed application in one statement.
pub async fn delete_applications(
    State(state): State<AppState>,
    body: Result<Json<DeleteApplicationsRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    input.validate()?;

    let deleted = state.store.delete_many(&input.ids).await?;

    tracing::info!(count = input.ids.len(), deleted, "Applications deleted");

    Ok(Json(SuccessResponse::OK))
}
