//! Verify Auth Code Use Case
//!
//! Checks a submitted code against the live entry for an email.
//! Every check is counted, match or not, and once the cap is reached
//! all further attempts are rejected for the rest of the window —
//! including correct ones. This bounds brute-force guessing to
//! `max_attempts` tries per code.

use std::sync::Arc;

use crate::application::config::VerificationConfig;
use crate::domain::repository::VerificationStore;
use crate::error::{VerificationError, VerificationResult};

/// Verify auth code use case
pub struct VerifyAuthCodeUseCase<S>
where
    S: VerificationStore,
{
    store: Arc<S>,
    config: Arc<VerificationConfig>,
}

impl<S> VerifyAuthCodeUseCase<S>
where
    S: VerificationStore,
{
    pub fn new(store: Arc<S>, config: Arc<VerificationConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, email: &str, submitted_code: &str) -> VerificationResult<()> {
        let mut entry = self
            .store
            .find(email)
            .await?
            .ok_or(VerificationError::VerificationNotFound)?;

        if entry.attempts_exhausted(self.config.max_attempts) {
            return Err(VerificationError::TooManyAttempts);
        }

        entry.record_attempt();

        if !entry.code.matches(submitted_code) {
            // The failed attempt still counts; TTL is untouched.
            self.store.update(&entry).await?;
            return Err(VerificationError::AuthCodeMismatch);
        }

        entry.mark_verified();
        self.store.update(&entry).await?;

        tracing::info!(email = %email, attempts = entry.attempt_count, "Email verified");

        Ok(())
    }
}
