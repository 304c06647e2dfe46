//! Delivery through the Resend HTTP API with exponential-backoff retry.
//!
//! Network failures, HTTP 429 and 5xx responses are retried up to the
//! configured attempt count (1 s, 2 s, 4 s, ... between attempts). Other
//! 4xx responses fail immediately.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::MailError;
use crate::mailer::Mailer;
use crate::message::{OutgoingEmail, SendReceipt};

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Sends email through `POST {base_url}/emails`.
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    max_attempts: u32,
    retry_base_delay: Duration,
}

impl ResendMailer {
    pub fn new(
        api_key: String,
        base_url: String,
        max_attempts: u32,
        retry_base_delay: Duration,
    ) -> Result<Self, MailError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MailError::Build(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/emails", base_url.trim_end_matches('/')),
            max_attempts: max_attempts.max(1),
            retry_base_delay,
        })
    }

    /// Execute a single POST request and check the response status.
    async fn try_send(&self, email: &OutgoingEmail) -> Result<SendReceipt, MailError> {
        let body = SendRequest {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or(text);
            return Err(MailError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SendResponse = response.json().await?;
        Ok(SendReceipt { id: parsed.id })
    }
}

/// Wait before retrying after failed attempt number `attempt` (1-based):
/// `base * 2^(attempt - 1)`, saturating instead of overflowing.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let factor = 2u32.checked_pow(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
    base.saturating_mul(factor)
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, MailError> {
        let mut attempt = 1;
        loop {
            match self.try_send(email).await {
                Ok(receipt) => {
                    tracing::info!(to = %email.to, id = ?receipt.id, attempt, "Email sent");
                    return Ok(receipt);
                }
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    let delay = backoff_delay(self.retry_base_delay, attempt);
                    tracing::warn!(
                        to = %email.to,
                        attempt,
                        error = %e,
                        "Email delivery attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(to = %email.to, attempt, error = %e, "Email delivery failed");
                    return Err(e);
                }
            }
        }
    }
}
