//! Session Context
//!
//! Bearer access-token validation for protected routes. Access tokens
//! are self-contained JWTs, so validation is stateless — no store
//! lookup is performed.

use axum::http::{HeaderMap, header};
use kernel::id::AccountId;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::authority::Authority;
use crate::error::{AuthError, AuthResult};
use crate::token;

/// Authenticated caller identity, taken from a validated access token.
///
/// Handlers of destructive operations trust this as
/// already-authenticated input and never read the identity from the
/// request body.
#[derive(Debug, Clone, Copy)]
pub struct CurrentAccount {
    pub account_id: AccountId,
    pub authority: Authority,
}

/// Extract and validate the Bearer access token from request headers.
pub fn extract_current_account(
    headers: &HeaderMap,
    config: &AuthConfig,
) -> AuthResult<CurrentAccount> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| AuthError::MissingHeader("Authorization".to_string()))?;

    let claims = token::decode_access_token(bearer, config)?;

    let account_id = Uuid::parse_str(&claims.sub)
        .map(AccountId::from_uuid)
        .map_err(|_| AuthError::InvalidToken)?;
    let authority = Authority::from_code(&claims.authority).ok_or(AuthError::InvalidToken)?;

    Ok(CurrentAccount {
        account_id,
        authority,
    })
}
