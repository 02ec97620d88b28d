//! Refresh Token Entity
//!
//! The persisted half of a token pair. Keyed by the opaque token
//! string; the store enforces the TTL, so an expired record is simply
//! absent on lookup.

use kernel::id::AccountId;

/// Refresh token record
///
/// At most one live record exists per token string. Records are
/// created on sign-in/reissue and consumed (deleted) by the next
/// reissue — a refresh token is single-use.
#[derive(Debug, Clone)]
pub struct RefreshToken {
    /// Opaque token string (store key)
    pub token: String,
    /// Owning account
    pub account_id: AccountId,
    /// Time-to-live in seconds, enforced by the store
    pub ttl_secs: u64,
}

impl RefreshToken {
    pub fn new(token: String, account_id: AccountId, ttl_secs: u64) -> Self {
        Self {
            token,
            account_id,
            ttl_secs,
        }
    }
}
