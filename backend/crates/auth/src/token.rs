//! JWT access token issuance/verification and opaque refresh token
//! generation.
//!
//! Access tokens are self-contained HS256 JWTs carrying the account
//! identity and authority; they are never stored server-side. Refresh
//! tokens are opaque random strings whose only meaning is the record
//! held in the token store.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use kernel::id::AccountId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::token_pair::TokenPair;
use crate::domain::value_object::authority::Authority;
use crate::error::{AuthError, AuthResult};

/// JWT claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject — account ID (UUID string).
    pub sub: String,
    /// Authority code (e.g. `ROLE_STUDENT`).
    pub authority: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Unique token ID (UUID string).
    pub jti: String,
}

/// Issue a signed HS256 JWT access token.
///
/// Returns the token together with its expiry timestamp.
pub fn issue_access_token(
    account_id: &AccountId,
    authority: Authority,
    config: &AuthConfig,
) -> AuthResult<(String, i64)> {
    let now = Utc::now().timestamp();
    let exp = now + config.access_token_ttl.as_secs() as i64;
    let claims = AccessTokenClaims {
        sub: account_id.to_string(),
        authority: authority.code().to_string(),
        iss: config.issuer.clone(),
        iat: now,
        exp,
        jti: Uuid::new_v4().to_string(),
    };

    let key = EncodingKey::from_secret(&config.token_secret);
    let header = Header::new(Algorithm::HS256);

    let token = jsonwebtoken::encode(&header, &claims, &key)
        .map_err(|e| AuthError::Internal(format!("JWT encode: {e}")))?;

    Ok((token, exp))
}

/// Decode and verify an HS256 JWT access token.
///
/// Used only by the session-context extractor; the auth core itself
/// never reads access tokens back.
pub fn decode_access_token(token: &str, config: &AuthConfig) -> AuthResult<AccessTokenClaims> {
    let key = DecodingKey::from_secret(&config.token_secret);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);
    validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);

    jsonwebtoken::decode::<AccessTokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
}

/// Generate a cryptographically random opaque refresh token
/// (32 bytes → base64url-encoded, no padding).
pub fn generate_refresh_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rand::Rng::random(&mut rng);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Issue a fresh token pair for an account.
///
/// Only builds the pair — persisting the refresh half is the caller's
/// job, and must be its last step.
pub fn issue_token_pair(
    account_id: &AccountId,
    authority: Authority,
    config: &AuthConfig,
) -> AuthResult<TokenPair> {
    let (access_token, access_token_exp) = issue_access_token(account_id, authority, config)?;
    let refresh_token = generate_refresh_token();
    let refresh_token_exp = Utc::now().timestamp() + config.refresh_token_ttl.as_secs() as i64;

    Ok(TokenPair {
        access_token,
        refresh_token,
        access_token_exp,
        refresh_token_exp,
        authority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig::with_random_secret()
    }

    #[test]
    fn jwt_roundtrip() {
        let config = test_config();
        let account_id = AccountId::new();

        let (token, exp) =
            issue_access_token(&account_id, Authority::RoleStudent, &config).unwrap();
        let claims = decode_access_token(&token, &config).unwrap();

        assert_eq!(claims.sub, account_id.to_string());
        assert_eq!(claims.authority, "ROLE_STUDENT");
        assert_eq!(claims.iss, config.issuer);
        assert_eq!(claims.exp, exp);
    }

    #[test]
    fn jti_is_unique() {
        let config = test_config();
        let account_id = AccountId::new();

        let (t1, _) = issue_access_token(&account_id, Authority::RoleStudent, &config).unwrap();
        let (t2, _) = issue_access_token(&account_id, Authority::RoleStudent, &config).unwrap();

        let c1 = decode_access_token(&t1, &config).unwrap();
        let c2 = decode_access_token(&t2, &config).unwrap();
        assert_ne!(c1.jti, c2.jti);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let config = test_config();
        let other = test_config();
        let account_id = AccountId::new();

        let (token, _) = issue_access_token(&account_id, Authority::RoleStudent, &config).unwrap();
        assert!(matches!(
            decode_access_token(&token, &other),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = test_config();
        let now = Utc::now().timestamp();
        let claims = AccessTokenClaims {
            sub: AccountId::new().to_string(),
            authority: "ROLE_STUDENT".to_string(),
            iss: config.issuer.clone(),
            iat: now - 7200,
            exp: now - 3600, // well past the default decode leeway
            jti: Uuid::new_v4().to_string(),
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&config.token_secret),
        )
        .unwrap();

        assert!(matches!(
            decode_access_token(&token, &config),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn refresh_token_is_url_safe() {
        let token = generate_refresh_token();
        // base64url characters only (A-Z a-z 0-9 - _), no padding.
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        // 32 bytes → 43 base64url chars.
        assert_eq!(token.len(), 43);
    }

    #[test]
    fn token_pair_carries_authority() {
        let config = test_config();
        let account_id = AccountId::new();

        let pair = issue_token_pair(&account_id, Authority::RoleStudent, &config).unwrap();
        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());
        assert_eq!(pair.authority, Authority::RoleStudent);
        assert!(pair.refresh_token_exp > pair.access_token_exp);
    }
}
