//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{account::Account, refresh_token::RefreshToken};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;
use kernel::id::AccountId;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Create a new account
    async fn create(&self, account: &Account) -> AuthResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Find account by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// Check if an account exists for this email
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Hard-delete an account
    async fn delete(&self, account_id: &AccountId) -> AuthResult<()>;
}

/// Refresh token store trait
///
/// A time-limited key-value store. Expiry is enforced by the store
/// itself; callers never see an expired record.
#[trait_variant::make(RefreshTokenStore: Send)]
pub trait LocalRefreshTokenStore {
    /// Persist a refresh token record with its TTL
    async fn save(&self, token: &RefreshToken) -> AuthResult<()>;

    /// Atomically consume a token record, returning its owner.
    ///
    /// The record is gone after this call; of two concurrent takes of
    /// the same token exactly one observes the record.
    async fn take(&self, token: &str) -> AuthResult<Option<AccountId>>;
}
