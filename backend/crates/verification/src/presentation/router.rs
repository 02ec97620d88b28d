//! Verification Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::VerificationConfig;
use crate::domain::repository::{MailSender, VerificationStore};
use crate::infra::mail::SmtpMailer;
use crate::infra::redis::RedisVerificationStore;
use crate::presentation::handlers::{self, VerificationAppState};

/// Create the verification router with the production stack
/// (Redis store, SMTP mailer)
pub fn verification_router(
    store: RedisVerificationStore,
    mailer: SmtpMailer,
    config: VerificationConfig,
) -> Router {
    verification_router_generic(store, mailer, config)
}

/// Create a generic verification router for any implementations
pub fn verification_router_generic<S, M>(store: S, mailer: M, config: VerificationConfig) -> Router
where
    S: VerificationStore + Clone + Send + Sync + 'static,
    M: MailSender + Clone + Send + Sync + 'static,
{
    let state = VerificationAppState {
        store: Arc::new(store),
        mailer: Arc::new(mailer),
        config: Arc::new(config),
    };

    Router::new()
        .route("/send", post(handlers::send_auth_code::<S, M>))
        .route("/verify", post(handlers::verify_auth_code::<S, M>))
        .with_state(state)
}
