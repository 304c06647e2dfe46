//! Delivery through an SMTP relay.
//!
//! [`SmtpMailer`] wraps the `lettre` async STARTTLS transport. The transport
//! is built once and reused for every message.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::response::Response;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::MailError;
use crate::mailer::Mailer;
use crate::message::{OutgoingEmail, SendReceipt};

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// `credentials` is `(user, password)`.
    pub fn new(
        host: &str,
        port: u16,
        credentials: Option<(String, String)>,
    ) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?.port(port);

        if let Some((user, password)) = credentials {
            builder = builder.credentials(Credentials::new(user, password));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

/// Assemble the MIME message for an outgoing email.
fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
    Message::builder()
        .from(email.from.parse::<Mailbox>()?)
        .to(email.to.parse::<Mailbox>()?)
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_HTML)
        .body(email.html.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, MailError> {
        let message = build_message(email)?;
        let response = self.transport.send(message).await?;

        tracing::info!(to = %email.to, code = %response.code(), "Email sent via SMTP");
        Ok(receipt_from(&response))
    }
}

/// The relay's first reply line, which usually carries the queue id.
fn receipt_from(response: &Response) -> SendReceipt {
    let id = response.message().next().map(str::to_string);
    SendReceipt { id }
}
