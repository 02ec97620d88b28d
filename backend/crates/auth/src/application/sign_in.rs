//! Sign In Use Case
//!
//! Authenticates an account and issues a fresh token pair.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{refresh_token::RefreshToken, token_pair::TokenPair};
use crate::domain::repository::{AccountRepository, RefreshTokenStore};
use crate::domain::value_object::{account_password::RawPassword, email::Email};
use crate::error::{AuthError, AuthResult};
use crate::token;

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<A, T>
where
    A: AccountRepository,
    T: RefreshTokenStore,
{
    accounts: Arc<A>,
    tokens: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<A, T> SignInUseCase<A, T>
where
    A: AccountRepository,
    T: RefreshTokenStore,
{
    pub fn new(accounts: Arc<A>, tokens: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self {
            accounts,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<TokenPair> {
        let email = Email::new(input.email.as_str()).map_err(|_| AuthError::AccountNotFound)?;

        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // Argon2 verification is constant-time on the hash comparison
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::PasswordMismatch)?;
        if !account.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::PasswordMismatch);
        }

        let pair = token::issue_token_pair(&account.account_id, account.authority, &self.config)?;

        // The refresh-token write is the last step of the use case:
        // nothing above may fail after the store has been touched, so a
        // failed sign-in can never leave an orphaned token behind.
        self.tokens
            .save(&RefreshToken::new(
                pair.refresh_token.clone(),
                account.account_id,
                self.config.refresh_token_ttl_secs(),
            ))
            .await?;

        tracing::info!(
            account_id = %account.account_id,
            authority = %account.authority,
            "Account signed in"
        );

        Ok(pair)
    }
}
