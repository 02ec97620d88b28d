//! Redis Refresh Token Store
//!
//! Refresh tokens live under `refresh_token:{token}` with a value of
//! the owning account's UUID. The TTL is set on write (`SET ... EX`)
//! and enforced by Redis, so expired records are simply absent — no
//! cleanup job exists or is needed.

use kernel::id::AccountId;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use uuid::Uuid;

use crate::domain::entity::refresh_token::RefreshToken;
use crate::domain::repository::RefreshTokenStore;
use crate::error::{AuthError, AuthResult};

const KEY_PREFIX: &str = "refresh_token";

/// Redis-backed refresh token store
#[derive(Clone)]
pub struct RedisRefreshTokenStore {
    conn: ConnectionManager,
}

impl RedisRefreshTokenStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    fn key(token: &str) -> String {
        format!("{}:{}", KEY_PREFIX, token)
    }
}

impl RefreshTokenStore for RedisRefreshTokenStore {
    async fn save(&self, token: &RefreshToken) -> AuthResult<()> {
        let mut conn = self.conn.clone();

        let _: () = conn
            .set_ex(
                Self::key(&token.token),
                token.account_id.to_string(),
                token.ttl_secs,
            )
            .await?;

        Ok(())
    }

    async fn take(&self, token: &str) -> AuthResult<Option<AccountId>> {
        let mut conn = self.conn.clone();

        // GETDEL is atomic: concurrent takes of the same token are
        // serialized by Redis and only one caller sees the value.
        let value: Option<String> = conn.get_del(Self::key(token)).await?;

        value
            .map(|v| {
                Uuid::parse_str(&v)
                    .map(AccountId::from_uuid)
                    .map_err(|e| AuthError::Internal(format!("Corrupt token record: {}", e)))
            })
            .transpose()
    }
}
