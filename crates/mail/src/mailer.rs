use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{MailConfig, MailProvider};
use crate::delivery::{ResendMailer, SmtpMailer};
use crate::error::MailError;
use crate::message::{OutgoingEmail, SendReceipt};

/// The email collaborator: one send operation, result or error.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<SendReceipt, MailError>;
}

/// Construct the transport selected by `config`.
pub fn build_mailer(config: &MailConfig) -> Result<Arc<dyn Mailer>, MailError> {
    let mailer: Arc<dyn Mailer> = match &config.provider {
        MailProvider::Resend { api_key, base_url } => Arc::new(ResendMailer::new(
            api_key.clone(),
            base_url.clone(),
            config.max_attempts,
            config.retry_base_delay,
        )?),
        MailProvider::Smtp {
            host,
            port,
            user,
            password,
        } => Arc::new(SmtpMailer::new(
            host,
            *port,
            user.clone().zip(password.clone()),
        )?),
    };
    Ok(mailer)
}
