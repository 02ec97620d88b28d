//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::token_pair::TokenPair;
use crate::domain::value_object::{authority::Authority, gender::Gender, major::Major};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub grade: i16,
    pub major: Major,
    pub gender: Gender,
}

// ============================================================================
// Sign In / Reissue
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Token pair response (sign-in and reissue)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token expiry (Unix timestamp, seconds)
    pub access_token_exp: i64,
    /// Refresh token expiry (Unix timestamp, seconds)
    pub refresh_token_exp: i64,
    pub authority: Authority,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            access_token_exp: pair.access_token_exp,
            refresh_token_exp: pair.refresh_token_exp,
            authority: pair.authority,
        }
    }
}

// ============================================================================
// Withdraw
// ============================================================================

/// Withdraw request — the acting account comes from the session
/// context, never from the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    pub password: String,
}
