//! Dashboard state machine for the applications table.
//!
//! Bulk email actions run in three steps so a UI can keep rendering while
//! the request is out: `prepare_*` validates and closes the in-flight gate,
//! [`ApplicationsBoard::execute`] calls the server, and
//! [`ApplicationsBoard::complete`] reopens the gate and refetches on
//! success. `shortlist_selected` and `send_task_selected` chain the three.

use std::sync::Arc;

use zenith_core::application::{Application, ApplicationStatus};
use zenith_core::types::ApplicationId;

use crate::client::{AdminApi, AdminError, ShortlistPayload, TaskPayload};
use crate::forms::{InterviewForm, TaskForm};
use crate::selection::Selection;

pub const SHORTLIST_DONE: &str = "Shortlist emails sent and status updated.";
pub const TASK_DONE: &str = "Task emails sent and status updated.";

/// Why a dashboard action did not happen. `Display` is the alert text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Select at least one application to shortlist.")]
    NothingSelectedForShortlist,

    #[error("Select at least one application to send tasks.")]
    NothingSelectedForTask,

    #[error("Please provide interview date, time, and meeting link.")]
    MissingInterviewDetails,

    #[error("Please provide task description and deadline.")]
    MissingTaskDetails,

    #[error("Another action is still running.")]
    Busy,

    /// The server or the network refused the action.
    #[error("{0}")]
    Request(String),
}

impl From<AdminError> for BoardError {
    fn from(err: AdminError) -> Self {
        BoardError::Request(err.to_string())
    }
}

/// Result of [`ApplicationsBoard::delete_selected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    NothingSelected,
    Cancelled,
    Deleted(usize),
}

/// A bulk action that passed validation and holds the in-flight gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Shortlist(ShortlistPayload),
    SendTask(TaskPayload),
}

impl PendingAction {
    fn success_message(&self) -> &'static str {
        match self {
            PendingAction::Shortlist(_) => SHORTLIST_DONE,
            PendingAction::SendTask(_) => TASK_DONE,
        }
    }
}

/// The admin's transient copy of the application list plus UI state.
pub struct ApplicationsBoard {
    api: Arc<dyn AdminApi>,
    applications: Vec<Application>,
    loading: bool,
    error: Option<String>,
    selection: Selection,
    in_flight: bool,
    pub interview: InterviewForm,
    pub task: TaskForm,
}

impl ApplicationsBoard {
    /// An empty board in the loading state; call [`refresh`](Self::refresh)
    /// to populate it.
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self {
            api,
            applications: Vec::new(),
            loading: true,
            error: None,
            selection: Selection::new(),
            in_flight: false,
            interview: InterviewForm::default(),
            task: TaskForm::default(),
        }
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    /// Reload the list from the server. Clears the selection and any previous
    /// error; on failure records the error and empties the list.
    pub async fn refresh(&mut self) {
        self.loading = true;

        match self.api.list_applications().await {
            Ok(applications) => {
                self.applications = applications;
                self.selection.clear();
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load applications");
                self.error = Some(e.to_string());
                self.applications.clear();
            }
        }

        self.loading = false;
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    fn all_ids(&self) -> Vec<ApplicationId> {
        self.applications.iter().map(|a| a.id).collect()
    }

    pub fn toggle_select(&mut self, id: ApplicationId) {
        self.selection.toggle(id);
    }

    pub fn toggle_select_all(&mut self) {
        let all = self.all_ids();
        self.selection.toggle_all(&all);
    }

    /// False for an empty list.
    pub fn all_selected(&self) -> bool {
        !self.applications.is_empty() && self.selection.covers(&self.all_ids())
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    // -----------------------------------------------------------------------
    // Single-row and delete actions
    // -----------------------------------------------------------------------

    /// Change one application's status and merge the server's copy in place.
    pub async fn update_status(
        &mut self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<(), BoardError> {
        let updated = self.api.update_status(id, status).await?;

        if let Some(row) = self.applications.iter_mut().find(|a| a.id == id) {
            *row = updated;
        }
        Ok(())
    }

    /// The confirmation prompt shown before deleting `count` rows.
    pub fn delete_prompt(count: usize) -> String {
        let noun = if count == 1 { "application" } else { "applications" };
        format!("Delete {count} {noun}? This cannot be undone.")
    }

    /// Delete the selected rows after `confirm` accepts the prompt.
    pub async fn delete_selected<F>(&mut self, confirm: F) -> Result<DeleteOutcome, BoardError>
    where
        F: FnOnce(&str) -> bool,
    {
        if self.selection.is_empty() {
            return Ok(DeleteOutcome::NothingSelected);
        }
        if !confirm(&Self::delete_prompt(self.selection.len())) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let ids = self.selection.ids().to_vec();
        self.api.delete_applications(&ids).await?;

        self.applications.retain(|a| !ids.contains(&a.id));
        self.selection.clear();
        Ok(DeleteOutcome::Deleted(ids.len()))
    }

    // -----------------------------------------------------------------------
    // Bulk email actions
    // -----------------------------------------------------------------------

    fn acquire(&mut self, action: PendingAction) -> Result<PendingAction, BoardError> {
        if self.in_flight {
            return Err(BoardError::Busy);
        }
        self.in_flight = true;
        Ok(action)
    }

    pub fn prepare_shortlist(&mut self) -> Result<PendingAction, BoardError> {
        if self.selection.is_empty() {
            return Err(BoardError::NothingSelectedForShortlist);
        }
        let payload = self
            .interview
            .payload(self.selection.ids())
            .ok_or(BoardError::MissingInterviewDetails)?;
        self.acquire(PendingAction::Shortlist(payload))
    }

    pub fn prepare_send_task(&mut self) -> Result<PendingAction, BoardError> {
        if self.selection.is_empty() {
            return Err(BoardError::NothingSelectedForTask);
        }
        let payload = self
            .task
            .payload(self.selection.ids())
            .ok_or(BoardError::MissingTaskDetails)?;
        self.acquire(PendingAction::SendTask(payload))
    }

    /// Send a prepared action to the server. Does not touch board state.
    pub async fn execute(&self, pending: &PendingAction) -> Result<(), AdminError> {
        match pending {
            PendingAction::Shortlist(payload) => self.api.shortlist(payload).await,
            PendingAction::SendTask(payload) => self.api.send_task(payload).await,
        }
    }

    /// Release the gate. On success refetch the list and return the success
    /// alert; on failure leave selection and forms untouched.
    pub async fn complete(
        &mut self,
        pending: PendingAction,
        result: Result<(), AdminError>,
    ) -> Result<&'static str, BoardError> {
        self.in_flight = false;

        match result {
            Ok(()) => {
                self.refresh().await;
                Ok(pending.success_message())
            }
            Err(e) => {
                tracing::error!(error = %e, "Bulk action failed");
                Err(e.into())
            }
        }
    }

    async fn run(&mut self, pending: PendingAction) -> Result<&'static str, BoardError> {
        let result = self.execute(&pending).await;
        self.complete(pending, result).await
    }

    /// Shortlist the selection and send interview invitations.
    pub async fn shortlist_selected(&mut self) -> Result<&'static str, BoardError> {
        let pending = self.prepare_shortlist()?;
        self.run(pending).await
    }

    /// Send the task email to the selection.
    pub async fn send_task_selected(&mut self) -> Result<&'static str, BoardError> {
        let pending = self.prepare_send_task()?;
        self.run(pending).await
    }
}
