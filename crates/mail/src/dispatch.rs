//! Concurrent fan-out of a batch of emails.
//!
//! Every email is sent independently; the batch waits until all sends have
//! settled and reports one [`DeliveryOutcome`] per job. A failed send is
//! logged and recorded, never propagated.

use futures::future::join_all;
use zenith_core::types::ApplicationId;

use crate::mailer::Mailer;
use crate::message::{OutgoingEmail, SendReceipt};

/// One email addressed on behalf of an application.
#[derive(Debug, Clone)]
pub struct DeliveryJob {
    pub application_id: ApplicationId,
    pub email: OutgoingEmail,
}

/// Result of a single send. The error is kept as its display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    pub application_id: ApplicationId,
    pub recipient: String,
    pub result: Result<SendReceipt, String>,
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-recipient outcomes of a batch, in job order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub outcomes: Vec<DeliveryOutcome>,
}

impl DispatchReport {
    pub fn delivered(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_delivered()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.delivered()
    }

    /// Applications whose email could not be sent.
    pub fn failed_ids(&self) -> Vec<ApplicationId> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_delivered())
            .map(|o| o.application_id)
            .collect()
    }
}

/// Send every job concurrently and wait for all of them to settle.
pub async fn dispatch_all(mailer: &dyn Mailer, jobs: Vec<DeliveryJob>) -> DispatchReport {
    let sends = jobs.into_iter().map(|job| async move {
        let result = mailer.send(&job.email).await.map_err(|e| {
            tracing::error!(
                application_id = %job.application_id,
                to = %job.email.to,
                error = %e,
                "Failed to send notification email"
            );
            e.to_string()
        });

        DeliveryOutcome {
            application_id: job.application_id,
            recipient: job.email.to,
            result,
        }
    });

    DispatchReport {
        outcomes: join_all(sends).await,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use uuid::Uuid;

    use super::*;
    use crate::error::MailError;

    /// Fails for one address, succeeds for every other.
    struct FlakyMailer {
        fail_for: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Mailer for FlakyMailer {
        async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, MailError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if email.to == self.fail_for {
                return Err(MailError::Provider {
                    status: 500,
                    message: "mailbox unavailable".into(),
                });
            }
            Ok(SendReceipt {
                id: Some(format!("msg-{}", email.to)),
            })
        }
    }

    fn job(to: &str) -> DeliveryJob {
        DeliveryJob {
            application_id: Uuid::new_v4(),
            email: OutgoingEmail {
                from: "HR <hr@example.com>".into(),
                to: to.into(),
                subject: "Interview Invitation - Designer".into(),
                html: "<p>Hi</p>".into(),
            },
        }
    }

    #[tokio::test]
    async fn partial_failure_is_reported_not_propagated() {
        let mailer = FlakyMailer {
            fail_for: "b@example.com",
            calls: AtomicUsize::new(0),
        };
        let jobs = vec![job("a@example.com"), job("b@example.com"), job("c@example.com")];
        let failing_id = jobs[1].application_id;

        let report = dispatch_all(&mailer, jobs).await;

        assert_eq!(mailer.calls.load(Ordering::SeqCst), 3);
        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.delivered(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failed_ids(), vec![failing_id]);
        assert_eq!(report.outcomes[1].recipient, "b@example.com");
        assert_eq!(
            report.outcomes[1].result,
            Err("Email provider returned HTTP 500: mailbox unavailable".to_string())
        );
        assert_eq!(
            report.outcomes[0].result,
            Ok(SendReceipt {
                id: Some("msg-a@example.com".into())
            })
        );
    }

    #[tokio::test]
    async fn empty_batch_sends_nothing() {
        let mailer = FlakyMailer {
            fail_for: "",
            calls: AtomicUsize::new(0),
        };
        let report = dispatch_all(&mailer, Vec::new()).await;

        assert_eq!(report, DispatchReport::default());
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 0);
    }
}
