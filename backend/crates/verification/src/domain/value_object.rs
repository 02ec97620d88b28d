//! Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits in a verification code
pub const AUTH_CODE_LENGTH: usize = 6;

/// Random numeric verification code
///
/// Always exactly [`AUTH_CODE_LENGTH`] digits, zero-padded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthCode(String);

impl AuthCode {
    /// Generate a fresh random code
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let value: u32 = rand::Rng::random_range(&mut rng, 0..1_000_000);
        Self(format!("{:06}", value))
    }

    /// Create from a stored value (assumed already well-formed)
    pub fn from_db(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Check a submitted code against this one
    pub fn matches(&self, submitted: &str) -> bool {
        self.0 == submitted
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
