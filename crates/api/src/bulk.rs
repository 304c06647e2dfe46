//! Bulk notification workflow shared by the shortlist and send-task endpoints.
//!
//! Fetch contacts, fan the emails out, then move every supplied id to the
//! target status. Email failures are reported in the [`DispatchReport`] and
//! never block the status transition.

use std::sync::Arc;

use zenith_core::application::{ApplicationContact, ApplicationStatus};
use zenith_core::types::ApplicationId;
use zenith_db::{ApplicationStore, StoreError};
use zenith_mail::{
    dispatch_all, DeliveryJob, DispatchReport, Letterhead, Mailer, OutgoingEmail, RenderedEmail,
};

/// The email collaborator together with the sender identity it mails as.
pub struct Notifier {
    pub mailer: Arc<dyn Mailer>,
    pub from_address: String,
    pub letterhead: Letterhead,
}

impl Notifier {
    pub fn new(
        mailer: Arc<dyn Mailer>,
        from_address: impl Into<String>,
        letterhead: Letterhead,
    ) -> Self {
        Self {
            mailer,
            from_address: from_address.into(),
            letterhead,
        }
    }

    fn job_for(&self, contact: &ApplicationContact, rendered: RenderedEmail) -> DeliveryJob {
        DeliveryJob {
            application_id: contact.id,
            email: OutgoingEmail {
                from: self.from_address.clone(),
                to: contact.email.clone(),
                subject: rendered.subject,
                html: rendered.html,
            },
        }
    }
}

/// What a bulk notification actually did.
#[derive(Debug)]
pub struct BulkOutcome {
    /// Number of ids in the request.
    pub requested: usize,
    /// Number of ids that matched a stored application.
    pub matched: usize,
    /// Per-recipient delivery results.
    pub report: DispatchReport,
    /// Rows moved to the target status.
    pub updated: u64,
}

/// Email every matching application, then set `target` on all of `ids`.
///
/// Only store failures abort the workflow.
pub async fn run_bulk_notification<F>(
    store: &dyn ApplicationStore,
    notifier: &Notifier,
    ids: &[ApplicationId],
    target: ApplicationStatus,
    render: F,
) -> Result<BulkOutcome, StoreError>
where
    F: Fn(&ApplicationContact, &Letterhead) -> RenderedEmail,
{
    let contacts = store.find_contacts(ids).await?;

    let jobs = contacts
        .iter()
        .map(|contact| notifier.job_for(contact, render(contact, &notifier.letterhead)))
        .collect();

    let report = dispatch_all(notifier.mailer.as_ref(), jobs).await;

    // Every supplied id transitions, whether or not its email went out.
    let updated = store.update_status_many(ids, target).await?;

    let outcome = BulkOutcome {
        requested: ids.len(),
        matched: contacts.len(),
        report,
        updated,
    };

    tracing::info!(
        status = %target,
        count = outcome.requested,
        matched = outcome.matched,
        delivered = outcome.report.delivered(),
        failed = outcome.report.failed(),
        updated = outcome.updated,
        "Bulk notification finished",
    );

    Ok(outcome)
}
