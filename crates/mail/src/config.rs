//! Email provider configuration.
//!
//! Built once at startup and handed to the transport constructors; nothing
//! in this crate reads the environment after that.

use std::time::Duration;

use crate::templates::Letterhead;

/// Default Resend API endpoint.
pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender when `MAIL_FROM` is not set.
pub const DEFAULT_FROM_ADDRESS: &str = "ZenithView HR <onboarding@resend.dev>";

/// Default number of delivery attempts per email.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Upper bound for `MAIL_MAX_ATTEMPTS`.
const MAX_ATTEMPTS_LIMIT: u32 = 10;

/// First retry delay; doubles on every further attempt.
const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

/// Error raised when the environment does not describe a usable provider.
#[derive(Debug, thiserror::Error)]
pub enum MailConfigError {
    #[error("Missing email provider credentials: set RESEND_API_KEY or SMTP_HOST")]
    MissingCredentials,

    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Which transport delivers the email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailProvider {
    /// Resend HTTP API.
    Resend { api_key: String, base_url: String },
    /// Plain SMTP relay with optional credentials.
    Smtp {
        host: String,
        port: u16,
        user: Option<String>,
        password: Option<String>,
    },
}

/// Configuration for outgoing email.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub provider: MailProvider,
    /// RFC 5322 "From" value used for every message.
    pub from_address: String,
    /// Attempts per email, including the first one. Always at least 1.
    pub max_attempts: u32,
    pub retry_base_delay: Duration,
    /// Organisation details printed in every template.
    pub letterhead: Letterhead,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable            | Required | Default                                   |
    /// |---------------------|----------|-------------------------------------------|
    /// | `RESEND_API_KEY`    | one of   | -                                         |
    /// | `SMTP_HOST`         | one of   | -                                         |
    /// | `RESEND_BASE_URL`   | no       | `https://api.resend.com`                  |
    /// | `SMTP_PORT`         | no       | `587`                                     |
    /// | `SMTP_USER`         | no       | -                                         |
    /// | `SMTP_PASSWORD`     | no       | -                                         |
    /// | `MAIL_FROM`         | no       | `ZenithView HR <onboarding@resend.dev>`   |
    /// | `MAIL_MAX_ATTEMPTS` | no       | `3` (1 to 10)                             |
    ///
    /// `RESEND_API_KEY` wins when both providers are configured.
    pub fn from_env() -> Result<Self, MailConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`MailConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MailConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let provider = if let Some(api_key) = var("RESEND_API_KEY") {
            MailProvider::Resend {
                api_key,
                base_url: var("RESEND_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_RESEND_BASE_URL.to_string()),
            }
        } else if let Some(host) = var("SMTP_HOST") {
            let port = match var("SMTP_PORT") {
                Some(raw) => raw.parse().map_err(|_| MailConfigError::Invalid {
                    name: "SMTP_PORT",
                    expected: "u16",
                    value: raw.clone(),
                })?,
                None => DEFAULT_SMTP_PORT,
            };
            MailProvider::Smtp {
                host,
                port,
                user: var("SMTP_USER"),
                password: var("SMTP_PASSWORD"),
            }
        } else {
            return Err(MailConfigError::MissingCredentials);
        };

        let max_attempts = match var("MAIL_MAX_ATTEMPTS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| (1..=MAX_ATTEMPTS_LIMIT).contains(n))
                .ok_or(MailConfigError::Invalid {
                    name: "MAIL_MAX_ATTEMPTS",
                    expected: "integer between 1 and 10",
                    value: raw,
                })?,
            None => DEFAULT_MAX_ATTEMPTS,
        };

        Ok(Self {
            provider,
            from_address: var("MAIL_FROM").unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
            max_attempts,
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
            letterhead: Letterhead::default(),
        })
    }
}
