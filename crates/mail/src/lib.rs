//! Transactional email for the hiring pipeline.
//!
//! - [`Mailer`] is the narrow send contract the rest of the system depends on.
//! - [`delivery`] holds the concrete transports (Resend HTTP API, SMTP).
//! - [`templates`] renders the shortlist and task emails.
//! - [`dispatch`] fans a batch of emails out concurrently and reports a
//!   per-recipient outcome instead of failing the batch.

pub mod config;
pub mod delivery;
pub mod dispatch;
pub mod error;
pub mod mailer;
pub mod message;
pub mod templates;

pub use config::{MailConfig, MailConfigError, MailProvider};
pub use dispatch::{dispatch_all, DeliveryJob, DeliveryOutcome, DispatchReport};
pub use error::MailError;
pub use mailer::{build_mailer, Mailer};
pub use message::{OutgoingEmail, SendReceipt};
pub use templates::{InterviewDetails, Letterhead, RenderedEmail, TaskDetails};
