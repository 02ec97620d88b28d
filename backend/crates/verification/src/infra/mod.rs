//! Infrastructure Layer
//!
//! Store and mail transport implementations.

pub mod mail;
pub mod redis;

pub use mail::SmtpMailer;
pub use redis::RedisVerificationStore;
