//! Verification (Email Verification) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Redis store and SMTP mail adapter
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Security Model
//! - Codes are random 6-digit numerics with a store-enforced TTL
//! - Every verification attempt is counted, match or not; the cap
//!   holds for the whole window even if the correct code arrives later
//! - A failed mail send rolls the entry back, so no live code exists
//!   that was never delivered

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::VerificationConfig;
pub use error::{VerificationError, VerificationResult};
pub use infra::mail::SmtpMailer;
pub use infra::redis::RedisVerificationStore;
pub use presentation::router::verification_router;

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
    pub use crate::infra::redis::RedisVerificationStore as VerificationCodeStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
