//! Value Object Module

pub mod account_password;
pub mod authority;
pub mod email;
pub mod gender;
pub mod major;

// Re-exports
pub use account_password::{AccountPassword, RawPassword};
pub use authority::Authority;
pub use email::Email;
pub use gender::Gender;
pub use major::Major;
