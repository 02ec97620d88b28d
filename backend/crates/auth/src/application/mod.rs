//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod reissue_token;
pub mod sign_in;
pub mod sign_up;
pub mod withdraw;

// Re-exports
pub use config::AuthConfig;
pub use reissue_token::ReissueTokenUseCase;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use withdraw::WithdrawUseCase;
