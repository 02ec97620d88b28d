//! Repository Traits
//!
//! Interfaces for the verification code store and the outbound mail
//! transport. Implementations live in the infrastructure layer.

use std::time::Duration;

use crate::domain::entity::VerificationEntry;
use crate::domain::value_object::AuthCode;
use crate::error::VerificationResult;

/// Verification code store trait
///
/// A time-limited key-value store keyed by email. The TTL is fixed
/// when an entry is created and preserved across updates; expired
/// entries are unreadable.
#[trait_variant::make(VerificationStore: Send)]
pub trait LocalVerificationStore {
    /// Write a fresh entry, starting a new validity window.
    ///
    /// Overwrites any previous entry for the same email.
    async fn create(&self, entry: &VerificationEntry, ttl: Duration) -> VerificationResult<()>;

    /// Update an existing entry without touching its remaining TTL
    async fn update(&self, entry: &VerificationEntry) -> VerificationResult<()>;

    /// Look up the live entry for an email, if any
    async fn find(&self, email: &str) -> VerificationResult<Option<VerificationEntry>>;

    /// Remove an entry before its TTL elapses
    async fn delete(&self, email: &str) -> VerificationResult<()>;
}

/// Outbound mail transport trait
#[trait_variant::make(MailSender: Send)]
pub trait LocalMailSender {
    /// Deliver a verification code to an address
    async fn send(&self, to: &str, code: &AuthCode) -> VerificationResult<()>;
}
