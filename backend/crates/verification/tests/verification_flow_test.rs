//! Integration tests for the verification use cases.
//!
//! Uses an in-memory TTL store on a manually advanced clock, a
//! recording mailer, and a failing mailer for the rollback path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use verification::application::config::VerificationConfig;
use verification::application::{SendAuthCodeUseCase, VerifyAuthCodeUseCase};
use verification::domain::entity::VerificationEntry;
use verification::domain::repository::{MailSender, VerificationStore};
use verification::domain::value_object::AuthCode;
use verification::error::{VerificationError, VerificationResult};

// ============================================================================
// In-memory test doubles
// ============================================================================

/// Manually advanced clock, shared between test and store.
#[derive(Clone, Default)]
struct FakeClock(Arc<AtomicI64>);

impl FakeClock {
    fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }

    fn advance_secs(&self, secs: i64) {
        self.0.fetch_add(secs, Ordering::SeqCst);
    }
}

/// TTL-enforcing in-memory store: `update` keeps the original expiry
/// (KEEPTTL semantics), `find` hides expired entries.
#[derive(Clone, Default)]
struct InMemoryVerificationStore {
    entries: Arc<Mutex<HashMap<String, (VerificationEntry, i64)>>>,
    clock: FakeClock,
}

impl VerificationStore for InMemoryVerificationStore {
    async fn create(&self, entry: &VerificationEntry, ttl: Duration) -> VerificationResult<()> {
        let expires_at = self.clock.now() + ttl.as_secs() as i64;
        self.entries
            .lock()
            .unwrap()
            .insert(entry.email.clone(), (entry.clone(), expires_at));
        Ok(())
    }

    async fn update(&self, entry: &VerificationEntry) -> VerificationResult<()> {
        let mut entries = self.entries.lock().unwrap();
        if let Some((stored, _expires_at)) = entries.get_mut(&entry.email) {
            *stored = entry.clone();
        }
        Ok(())
    }

    async fn find(&self, email: &str) -> VerificationResult<Option<VerificationEntry>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .get(email)
            .filter(|(_, expires_at)| self.clock.now() < *expires_at)
            .map(|(entry, _)| entry.clone()))
    }

    async fn delete(&self, email: &str) -> VerificationResult<()> {
        self.entries.lock().unwrap().remove(email);
        Ok(())
    }
}

/// Mailer that records every delivery.
#[derive(Clone, Default)]
struct RecordingMailSender {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingMailSender {
    fn last_code(&self) -> String {
        self.sent.lock().unwrap().last().unwrap().1.clone()
    }

    fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl MailSender for RecordingMailSender {
    async fn send(&self, to: &str, code: &AuthCode) -> VerificationResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), code.as_str().to_string()));
        Ok(())
    }
}

/// Mailer whose transport always fails.
#[derive(Clone, Default)]
struct FailingMailSender;

impl MailSender for FailingMailSender {
    async fn send(&self, _to: &str, _code: &AuthCode) -> VerificationResult<()> {
        Err(VerificationError::EmailSendFail)
    }
}

// ============================================================================
// Setup
// ============================================================================

const TEST_EMAIL: &str = "s22039@school.hs.kr";

fn setup() -> (
    Arc<InMemoryVerificationStore>,
    Arc<RecordingMailSender>,
    FakeClock,
    Arc<VerificationConfig>,
) {
    let store = Arc::new(InMemoryVerificationStore::default());
    let mailer = Arc::new(RecordingMailSender::default());
    let clock = store.clock.clone();
    let config = Arc::new(VerificationConfig::default());
    (store, mailer, clock, config)
}

// ============================================================================
// Send
// ============================================================================

#[tokio::test]
async fn send_writes_entry_and_delivers_mail() {
    let (store, mailer, _clock, config) = setup();
    let send = SendAuthCodeUseCase::new(store.clone(), mailer.clone(), config.clone());

    send.execute(TEST_EMAIL.to_string()).await.unwrap();

    assert_eq!(mailer.sent_count(), 1);

    let entry = store.find(TEST_EMAIL).await.unwrap().unwrap();
    assert_eq!(entry.attempt_count, 0);
    assert!(!entry.verified);
    assert!(entry.code.matches(&mailer.last_code()));
}

#[tokio::test]
async fn send_failure_rolls_back_entry() {
    let (store, _mailer, _clock, config) = setup();
    let send = SendAuthCodeUseCase::new(
        store.clone(),
        Arc::new(FailingMailSender),
        config.clone(),
    );

    let result = send.execute(TEST_EMAIL.to_string()).await;
    assert!(matches!(result, Err(VerificationError::EmailSendFail)));

    // No live entry may exist for a code that was never delivered.
    assert!(store.find(TEST_EMAIL).await.unwrap().is_none());
}

#[tokio::test]
async fn send_rejects_bad_email() {
    let (store, mailer, _clock, config) = setup();
    let send = SendAuthCodeUseCase::new(store, mailer.clone(), config);

    let result = send.execute("not-an-email".to_string()).await;
    assert!(matches!(result, Err(VerificationError::Validation(_))));
    assert_eq!(mailer.sent_count(), 0);
}

#[tokio::test]
async fn resend_starts_fresh_window() {
    let (store, mailer, _clock, config) = setup();
    let send = SendAuthCodeUseCase::new(store.clone(), mailer.clone(), config.clone());
    let verify = VerifyAuthCodeUseCase::new(store.clone(), config.clone());

    send.execute(TEST_EMAIL.to_string()).await.unwrap();
    let _ = verify.execute(TEST_EMAIL, "000000").await;

    // A resend replaces the entry: attempt count back to zero.
    send.execute(TEST_EMAIL.to_string()).await.unwrap();

    let entry = store.find(TEST_EMAIL).await.unwrap().unwrap();
    assert_eq!(entry.attempt_count, 0);
    assert!(entry.code.matches(&mailer.last_code()));
}

// ============================================================================
// Verify
// ============================================================================

#[tokio::test]
async fn verify_happy_path() {
    let (store, mailer, _clock, config) = setup();
    let send = SendAuthCodeUseCase::new(store.clone(), mailer.clone(), config.clone());
    let verify = VerifyAuthCodeUseCase::new(store.clone(), config.clone());

    send.execute(TEST_EMAIL.to_string()).await.unwrap();

    verify.execute(TEST_EMAIL, &mailer.last_code()).await.unwrap();

    let entry = store.find(TEST_EMAIL).await.unwrap().unwrap();
    assert!(entry.verified);
    assert_eq!(entry.attempt_count, 1);
}

#[tokio::test]
async fn wrong_code_counts_attempt_and_fails() {
    let (store, mailer, _clock, config) = setup();
    let send = SendAuthCodeUseCase::new(store.clone(), mailer.clone(), config.clone());
    let verify = VerifyAuthCodeUseCase::new(store.clone(), config.clone());

    send.execute(TEST_EMAIL.to_string()).await.unwrap();

    let wrong = if mailer.last_code() == "000000" { "000001" } else { "000000" };
    let result = verify.execute(TEST_EMAIL, wrong).await;
    assert!(matches!(result, Err(VerificationError::AuthCodeMismatch)));

    // The failed attempt is persisted.
    let entry = store.find(TEST_EMAIL).await.unwrap().unwrap();
    assert_eq!(entry.attempt_count, 1);
    assert!(!entry.verified);
}

#[tokio::test]
async fn correct_code_after_some_failures_succeeds() {
    let (store, mailer, _clock, config) = setup();
    let send = SendAuthCodeUseCase::new(store.clone(), mailer.clone(), config.clone());
    let verify = VerifyAuthCodeUseCase::new(store.clone(), config.clone());

    send.execute(TEST_EMAIL.to_string()).await.unwrap();
    let code = mailer.last_code();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    // max_attempts - 1 wrong guesses...
    for _ in 0..config.max_attempts - 1 {
        let result = verify.execute(TEST_EMAIL, wrong).await;
        assert!(matches!(result, Err(VerificationError::AuthCodeMismatch)));
    }

    // ...still leave room for the correct one.
    verify.execute(TEST_EMAIL, &code).await.unwrap();

    let entry = store.find(TEST_EMAIL).await.unwrap().unwrap();
    assert!(entry.verified);
    assert_eq!(entry.attempt_count, config.max_attempts);
}

#[tokio::test]
async fn attempt_cap_blocks_even_correct_code() {
    let (store, mailer, _clock, config) = setup();
    let send = SendAuthCodeUseCase::new(store.clone(), mailer.clone(), config.clone());
    let verify = VerifyAuthCodeUseCase::new(store.clone(), config.clone());

    send.execute(TEST_EMAIL.to_string()).await.unwrap();
    let code = mailer.last_code();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    // Burn the whole budget on wrong guesses.
    for _ in 0..config.max_attempts {
        let result = verify.execute(TEST_EMAIL, wrong).await;
        assert!(matches!(result, Err(VerificationError::AuthCodeMismatch)));
    }

    // The correct code arrives too late.
    let result = verify.execute(TEST_EMAIL, &code).await;
    assert!(matches!(result, Err(VerificationError::TooManyAttempts)));

    let entry = store.find(TEST_EMAIL).await.unwrap().unwrap();
    assert!(!entry.verified);
}

#[tokio::test]
async fn verify_unknown_email_fails() {
    let (store, _mailer, _clock, config) = setup();
    let verify = VerifyAuthCodeUseCase::new(store, config);

    let result = verify.execute("nobody@school.hs.kr", "123456").await;
    assert!(matches!(result, Err(VerificationError::VerificationNotFound)));
}

// ============================================================================
// Expiry
// ============================================================================

#[tokio::test]
async fn entry_expires_after_ttl() {
    let (store, mailer, clock, config) = setup();
    let send = SendAuthCodeUseCase::new(store.clone(), mailer.clone(), config.clone());
    let verify = VerifyAuthCodeUseCase::new(store.clone(), config.clone());

    send.execute(TEST_EMAIL.to_string()).await.unwrap();
    let code = mailer.last_code();

    clock.advance_secs(config.code_ttl_secs() as i64 + 1);

    let result = verify.execute(TEST_EMAIL, &code).await;
    assert!(matches!(result, Err(VerificationError::VerificationNotFound)));
}

#[tokio::test]
async fn attempts_do_not_extend_the_window() {
    let (store, mailer, clock, config) = setup();
    let send = SendAuthCodeUseCase::new(store.clone(), mailer.clone(), config.clone());
    let verify = VerifyAuthCodeUseCase::new(store.clone(), config.clone());

    send.execute(TEST_EMAIL.to_string()).await.unwrap();
    let code = mailer.last_code();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    // An attempt just before expiry updates the entry...
    clock.advance_secs(config.code_ttl_secs() as i64 - 1);
    let result = verify.execute(TEST_EMAIL, wrong).await;
    assert!(matches!(result, Err(VerificationError::AuthCodeMismatch)));

    // ...but the original window still closes on schedule.
    clock.advance_secs(2);
    let result = verify.execute(TEST_EMAIL, &code).await;
    assert!(matches!(result, Err(VerificationError::VerificationNotFound)));
}
