//! Controller for the job-applications admin dashboard.
//!
//! [`board::ApplicationsBoard`] owns the dashboard state (list, selection,
//! bulk-action forms, in-flight gate) and talks to the server through the
//! [`client::AdminApi`] trait. [`view`] turns that state into what a table
//! renderer needs.

pub mod board;
pub mod client;
pub mod forms;
pub mod selection;
pub mod view;

pub use board::{ApplicationsBoard, BoardError, DeleteOutcome, PendingAction};
pub use client::{AdminApi, AdminError, HttpAdminClient, ShortlistPayload, TaskPayload};
pub use forms::{InterviewForm, TaskForm};
pub use selection::Selection;
pub use view::{BodyView, JobDirectory, ResumeCell, RowView, ToolbarView};
