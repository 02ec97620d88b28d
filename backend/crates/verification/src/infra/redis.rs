//! Redis Verification Store
//!
//! Entries live under `authentication:{email}` as JSON, with the TTL
//! set on creation (`SET ... EX`) and preserved across attempt-count
//! updates (`SET ... KEEPTTL`). Redis enforces the expiry, so expired
//! entries are simply absent — no cleanup job exists or is needed.

use std::time::Duration;

use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::domain::entity::VerificationEntry;
use crate::domain::repository::VerificationStore;
use crate::error::VerificationResult;

const KEY_PREFIX: &str = "authentication";

/// Redis-backed verification store
#[derive(Clone)]
pub struct RedisVerificationStore {
    conn: ConnectionManager,
}

impl RedisVerificationStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    fn key(email: &str) -> String {
        format!("{}:{}", KEY_PREFIX, email)
    }
}

impl VerificationStore for RedisVerificationStore {
    async fn create(&self, entry: &VerificationEntry, ttl: Duration) -> VerificationResult<()> {
        let mut conn = self.conn.clone();
        let json = serde_json::to_string(entry)?;

        let _: () = conn
            .set_ex(Self::key(&entry.email), json, ttl.as_secs())
            .await?;

        Ok(())
    }

    async fn update(&self, entry: &VerificationEntry) -> VerificationResult<()> {
        let mut conn = self.conn.clone();
        let json = serde_json::to_string(entry)?;

        // KEEPTTL: the attempt counter changes, the window does not.
        let _: () = redis::cmd("SET")
            .arg(Self::key(&entry.email))
            .arg(json)
            .arg("KEEPTTL")
            .query_async(&mut conn)
            .await?;

        Ok(())
    }

    async fn find(&self, email: &str) -> VerificationResult<Option<VerificationEntry>> {
        let mut conn = self.conn.clone();

        let json: Option<String> = conn.get(Self::key(email)).await?;

        json.map(|j| serde_json::from_str(&j).map_err(Into::into))
            .transpose()
    }

    async fn delete(&self, email: &str) -> VerificationResult<()> {
        let mut conn = self.conn.clone();

        let _: () = conn.del(Self::key(email)).await?;

        Ok(())
    }
}
