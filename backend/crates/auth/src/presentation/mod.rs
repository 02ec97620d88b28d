//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and session context.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{CurrentAccount, extract_current_account};
pub use router::{auth_router, auth_router_generic};
