//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod postgres;
pub mod redis;

pub use postgres::PgAccountRepository;
pub use redis::RedisRefreshTokenStore;
