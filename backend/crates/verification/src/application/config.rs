//! Application Configuration
//!
//! Configuration for the verification application layer.

use std::time::Duration;

/// Verification application configuration
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Validity window of a sent code (5 minutes)
    pub code_ttl: Duration,
    /// Maximum verification attempts per code
    pub max_attempts: u32,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl: Duration::from_secs(5 * 60), // 5 minutes
            max_attempts: 5,
        }
    }
}

impl VerificationConfig {
    /// Create config for development
    pub fn development() -> Self {
        Self::default()
    }

    /// Get code TTL in seconds
    pub fn code_ttl_secs(&self) -> u64 {
        self.code_ttl.as_secs()
    }
}
