//! Reissue Token Use Case
//!
//! Exchanges a refresh token for a brand-new token pair. Rotation
//! policy: the presented token is atomically consumed before the new
//! pair is issued, so every refresh token is usable exactly once.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{refresh_token::RefreshToken, token_pair::TokenPair};
use crate::domain::repository::{AccountRepository, RefreshTokenStore};
use crate::error::{AuthError, AuthResult};
use crate::token;

/// Reissue token use case
pub struct ReissueTokenUseCase<A, T>
where
    A: AccountRepository,
    T: RefreshTokenStore,
{
    accounts: Arc<A>,
    tokens: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<A, T> ReissueTokenUseCase<A, T>
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

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        // Atomic take: of two concurrent reissues of the same token,
        // exactly one gets the record; the loser fails here.
        let account_id = self
            .tokens
            .take(refresh_token)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        let account = self
            .accounts
            .find_by_id(&account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let pair = token::issue_token_pair(&account.account_id, account.authority, &self.config)?;

        // As in sign-in, persisting the replacement record is the last
        // step; the old token is already gone at this point.
        self.tokens
            .save(&RefreshToken::new(
                pair.refresh_token.clone(),
                account.account_id,
                self.config.refresh_token_ttl_secs(),
            ))
            .await?;

        tracing::info!(
            account_id = %account.account_id,
            "Token pair reissued"
        );

        Ok(pair)
    }
}
