//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    ReissueTokenUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, WithdrawUseCase,
};
use crate::domain::repository::{AccountRepository, RefreshTokenStore};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{SignInRequest, SignUpRequest, TokenResponse, WithdrawRequest};
use crate::presentation::middleware::extract_current_account;

/// Header carrying the refresh token on reissue requests
const REFRESH_TOKEN_HEADER: &str = "refreshToken";

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<A, T>
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenStore + Clone + Send + Sync + 'static,
{
    pub accounts: Arc<A>,
    pub tokens: Arc<T>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/v2/auth/signup
pub async fn sign_up<A, T>(
    State(state): State<AuthAppState<A, T>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<StatusCode>
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenStore + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.accounts.clone(), state.config.clone());

    let input = SignUpInput {
        email: req.email,
        password: req.password,
        name: req.name,
        grade: req.grade,
        major: req.major,
        gender: req.gender,
    };

    use_case.execute(input).await?;

    Ok(StatusCode::CREATED)
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/v2/auth/signin
pub async fn sign_in<A, T>(
    State(state): State<AuthAppState<A, T>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenStore + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.accounts.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let pair = use_case.execute(input).await?;

    Ok(Json(TokenResponse::from(pair)))
}

// ============================================================================
// Reissue
// ============================================================================

/// PATCH /api/v2/auth
///
/// The refresh token travels in the `refreshToken` header, not the
/// body.
pub async fn reissue<A, T>(
    State(state): State<AuthAppState<A, T>>,
    headers: HeaderMap,
) -> AuthResult<Json<TokenResponse>>
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenStore + Clone + Send + Sync + 'static,
{
    let refresh_token = headers
        .get(REFRESH_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AuthError::MissingHeader(REFRESH_TOKEN_HEADER.to_string()))?;

    let use_case = ReissueTokenUseCase::new(
        state.accounts.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let pair = use_case.execute(refresh_token).await?;

    Ok(Json(TokenResponse::from(pair)))
}

// ============================================================================
// Withdraw
// ============================================================================

/// DELETE /api/v2/auth
///
/// Requires a valid Bearer access token; the password is re-verified
/// by the use case before deletion.
pub async fn withdraw<A, T>(
    State(state): State<AuthAppState<A, T>>,
    headers: HeaderMap,
    Json(req): Json<WithdrawRequest>,
) -> AuthResult<StatusCode>
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenStore + Clone + Send + Sync + 'static,
{
    let current = extract_current_account(&headers, &state.config)?;

    let use_case = WithdrawUseCase::new(state.accounts.clone(), state.config.clone());

    use_case.execute(current.account_id, req.password).await?;

    Ok(StatusCode::NO_CONTENT)
}
