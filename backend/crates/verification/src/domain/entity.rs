//! Domain Entities

use serde::{Deserialize, Serialize};

use crate::domain::value_object::AuthCode;

/// Verification entry - one live code per email address
///
/// Keyed by email in the store, which also enforces the TTL: an
/// expired entry is simply gone, and the next send starts a fresh
/// window with attempt count zero.
///
/// The attempt count only ever grows within one window, including on
/// successful verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationEntry {
    /// Email address the code was sent to (store key)
    pub email: String,
    /// The code to compare submissions against
    pub code: AuthCode,
    /// Number of verification attempts made against this code
    pub attempt_count: u32,
    /// Whether a matching code was submitted within the window
    pub verified: bool,
}

impl VerificationEntry {
    /// Create a fresh entry for a newly sent code
    pub fn new(email: String, code: AuthCode) -> Self {
        Self {
            email,
            code,
            attempt_count: 0,
            verified: false,
        }
    }

    /// Whether the attempt cap has been reached
    pub fn attempts_exhausted(&self, max_attempts: u32) -> bool {
        self.attempt_count >= max_attempts
    }

    /// Count a verification attempt (match or not)
    pub fn record_attempt(&mut self) {
        self.attempt_count += 1;
    }

    /// Mark the entry verified after a matching submission
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> VerificationEntry {
        VerificationEntry::new(
            "s22039@school.hs.kr".to_string(),
            AuthCode::from_db("123456"),
        )
    }

    #[test]
    fn test_fresh_entry() {
        let entry = entry();
        assert_eq!(entry.attempt_count, 0);
        assert!(!entry.verified);
        assert!(!entry.attempts_exhausted(5));
    }

    #[test]
    fn test_attempt_cap() {
        let mut entry = entry();
        for _ in 0..5 {
            assert!(!entry.attempts_exhausted(5));
            entry.record_attempt();
        }
        assert!(entry.attempts_exhausted(5));
    }

    #[test]
    fn test_json_roundtrip_keeps_state() {
        let mut entry = entry();
        entry.record_attempt();
        entry.mark_verified();

        let json = serde_json::to_string(&entry).unwrap();
        let restored: VerificationEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.attempt_count, 1);
        assert!(restored.verified);
        assert!(restored.code.matches("123456"));
    }
}
