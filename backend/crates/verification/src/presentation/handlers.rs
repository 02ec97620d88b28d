//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::VerificationConfig;
use crate::application::{SendAuthCodeUseCase, VerifyAuthCodeUseCase};
use crate::domain::repository::{MailSender, VerificationStore};
use crate::error::VerificationResult;
use crate::presentation::dto::{SendAuthCodeRequest, VerifyAuthCodeRequest};

/// Shared state for verification handlers
#[derive(Clone)]
pub struct VerificationAppState<S, M>
where
    S: VerificationStore + Clone + Send + Sync + 'static,
    M: MailSender + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub mailer: Arc<M>,
    pub config: Arc<VerificationConfig>,
}

/// POST /api/v2/email/send
pub async fn send_auth_code<S, M>(
    State(state): State<VerificationAppState<S, M>>,
    Json(req): Json<SendAuthCodeRequest>,
) -> VerificationResult<StatusCode>
where
    S: VerificationStore + Clone + Send + Sync + 'static,
    M: MailSender + Clone + Send + Sync + 'static,
{
    let use_case = SendAuthCodeUseCase::new(
        state.store.clone(),
        state.mailer.clone(),
        state.config.clone(),
    );

    use_case.execute(req.email).await?;

    Ok(StatusCode::CREATED)
}

/// POST /api/v2/email/verify
pub async fn verify_auth_code<S, M>(
    State(state): State<VerificationAppState<S, M>>,
    Json(req): Json<VerifyAuthCodeRequest>,
) -> VerificationResult<StatusCode>
where
    S: VerificationStore + Clone + Send + Sync + 'static,
    M: MailSender + Clone + Send + Sync + 'static,
{
    let use_case = VerifyAuthCodeUseCase::new(state.store.clone(), state.config.clone());

    use_case.execute(&req.email, &req.auth_code).await?;

    Ok(StatusCode::NO_CONTENT)
}
