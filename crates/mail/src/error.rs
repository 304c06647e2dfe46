/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The HTTP request to the provider failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("Email provider returned HTTP {status}: {message}")]
    Provider { status: u16, message: String },

    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message or HTTP client could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

impl MailError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            MailError::Request(_) => true,
            MailError::Provider { status, .. } => *status == 429 || *status >= 500,
            MailError::Smtp(err) => err.is_transient(),
            MailError::Address(_) | MailError::Build(_) => false,
        }
    }
}
