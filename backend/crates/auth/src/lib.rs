//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and token store implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Account signup/signin with email + password
//! - Self-contained HS256 JWT access tokens (never stored server-side)
//! - Opaque single-use refresh tokens with store-enforced TTL
//! - Token rotation on reissue (replay of a consumed token fails)
//! - Password-reverified account withdrawal
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - Refresh tokens persisted only after every other step of the
//!   operation has succeeded (no orphaned tokens)
//! - Concurrent reissues of one token are serialized by the store's
//!   atomic consume

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;
pub mod token;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAccountRepository;
pub use infra::redis::RedisRefreshTokenStore;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAccountRepository as AccountStore;
    pub use crate::infra::redis::RedisRefreshTokenStore as TokenStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
