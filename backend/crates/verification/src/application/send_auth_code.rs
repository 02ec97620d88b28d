//! Send Auth Code Use Case
//!
//! Generates a random numeric code, writes a fresh verification entry,
//! and emails the code. The send runs on a spawned task so a dropped
//! request cannot abort a delivery already in flight; its outcome is
//! still awaited, and a transport failure rolls the entry back — a
//! live entry never exists for a code that was not delivered.

use std::sync::Arc;

use crate::application::config::VerificationConfig;
use crate::domain::entity::VerificationEntry;
use crate::domain::repository::{MailSender, VerificationStore};
use crate::domain::value_object::AuthCode;
use crate::error::{VerificationError, VerificationResult};

/// Send auth code use case
pub struct SendAuthCodeUseCase<S, M>
where
    S: VerificationStore,
    M: MailSender + Send + Sync + 'static,
{
    store: Arc<S>,
    mailer: Arc<M>,
    config: Arc<VerificationConfig>,
}

impl<S, M> SendAuthCodeUseCase<S, M>
where
    S: VerificationStore,
    M: MailSender + Send + Sync + 'static,
{
    pub fn new(store: Arc<S>, mailer: Arc<M>, config: Arc<VerificationConfig>) -> Self {
        Self {
            store,
            mailer,
            config,
        }
    }

    pub async fn execute(&self, email: String) -> VerificationResult<()> {
        if !email.contains('@') {
            return Err(VerificationError::Validation(
                "Invalid email address".to_string(),
            ));
        }

        let code = AuthCode::generate();

        // A resend overwrites the previous entry: new code, attempt
        // count zero, fresh TTL window.
        let entry = VerificationEntry::new(email.clone(), code.clone());
        self.store.create(&entry, self.config.code_ttl).await?;

        let mailer = self.mailer.clone();
        let to = email.clone();
        let handle = tokio::spawn(async move { mailer.send(&to, &code).await });

        match handle.await {
            Ok(Ok(())) => {
                tracing::info!(email = %email, "Verification code sent");
                Ok(())
            }
            Ok(Err(e)) => {
                tracing::warn!(email = %email, error = %e, "Verification mail failed, rolling back entry");
                self.store.delete(&email).await?;
                Err(VerificationError::EmailSendFail)
            }
            Err(e) => {
                self.store.delete(&email).await?;
                Err(VerificationError::Internal(format!("mail task panicked: {e}")))
            }
        }
    }
}
