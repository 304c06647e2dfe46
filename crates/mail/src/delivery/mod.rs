//! Concrete email transports.

pub mod resend;
pub mod smtp;

pub use resend::ResendMailer;
pub use smtp::SmtpMailer;
