//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::VerificationAppState;
pub use router::{verification_router, verification_router_generic};
