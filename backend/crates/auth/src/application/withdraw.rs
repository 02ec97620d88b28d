//! Withdraw Use Case
//!
//! Hard-deletes the acting account. The account identity comes from
//! the caller's session context, but the password is re-verified — a
//! stolen access token alone is not enough to destroy an account.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_password::RawPassword;
use crate::error::{AuthError, AuthResult};

/// Withdraw use case
pub struct WithdrawUseCase<A>
where
    A: AccountRepository,
{
    accounts: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> WithdrawUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(accounts: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self { accounts, config }
    }

    pub async fn execute(&self, account_id: AccountId, password: String) -> AuthResult<()> {
        let account = self
            .accounts
            .find_by_id(&account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let raw_password = RawPassword::new(password).map_err(|_| AuthError::PasswordMismatch)?;
        if !account.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::PasswordMismatch);
        }

        self.accounts.delete(&account.account_id).await?;

        tracing::info!(
            account_id = %account.account_id,
            "Account withdrawn"
        );

        Ok(())
    }
}
