//! Token Pair
//!
//! Transient result of sign-in and reissue. Never persisted as a
//! whole — only the refresh half goes to the token store.

use crate::domain::value_object::authority::Authority;

/// Access + refresh token pair handed to the caller
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Signed JWT, self-contained, never stored server-side
    pub access_token: String,
    /// Opaque single-use refresh token
    pub refresh_token: String,
    /// Access token expiry (Unix timestamp, seconds)
    pub access_token_exp: i64,
    /// Refresh token expiry (Unix timestamp, seconds)
    pub refresh_token_exp: i64,
    /// Authority of the owning account
    pub authority: Authority,
}
