//! SMTP Mail Adapter
//!
//! `MailSender` implementation over an async SMTP transport.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::repository::MailSender;
use crate::domain::value_object::AuthCode;
use crate::error::{VerificationError, VerificationResult};

/// SMTP-backed mail sender
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer over TLS SMTP relay
    pub fn new(
        host: &str,
        username: String,
        password: String,
        from: &str,
    ) -> VerificationResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| VerificationError::Internal(format!("SMTP relay setup: {e}")))?
            .credentials(Credentials::new(username, password))
            .build();

        let from: Mailbox = from
            .parse()
            .map_err(|e| VerificationError::Internal(format!("Invalid from address: {e}")))?;

        Ok(Self { transport, from })
    }
}

impl MailSender for SmtpMailer {
    async fn send(&self, to: &str, code: &AuthCode) -> VerificationResult<()> {
        let to: Mailbox = to
            .parse()
            .map_err(|_| VerificationError::Validation("Invalid email address".to_string()))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Verification code")
            .body(format!("Your verification code is {}.", code))
            .map_err(|e| VerificationError::Internal(format!("Mail build: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "SMTP send failed");
                VerificationError::EmailSendFail
            })?;

        Ok(())
    }
}
