//! Auth Router

use axum::{
    Router,
    routing::{patch, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AccountRepository, RefreshTokenStore};
use crate::infra::postgres::PgAccountRepository;
use crate::infra::redis::RedisRefreshTokenStore;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the production store stack
/// (PostgreSQL accounts, Redis refresh tokens)
pub fn auth_router(
    accounts: PgAccountRepository,
    tokens: RedisRefreshTokenStore,
    config: AuthConfig,
) -> Router {
    auth_router_generic(accounts, tokens, config)
}

/// Create a generic Auth router for any store implementations
pub fn auth_router_generic<A, T>(accounts: A, tokens: T, config: AuthConfig) -> Router
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    T: RefreshTokenStore + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        accounts: Arc::new(accounts),
        tokens: Arc::new(tokens),
        config: Arc::new(config),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<A, T>))
        .route("/signin", post(handlers::sign_in::<A, T>))
        .route(
            "/",
            patch(handlers::reissue::<A, T>).delete(handlers::withdraw::<A, T>),
        )
        .with_state(state)
}
