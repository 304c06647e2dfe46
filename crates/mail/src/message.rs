use serde::Serialize;

/// A fully rendered email ready to hand to a [`Mailer`](crate::Mailer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    /// RFC 5322 sender, e.g. `ZenithView HR <onboarding@resend.dev>`.
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Acknowledgement from the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
    /// Provider message id, when the transport reports one.
    pub id: Option<String>,
}
