//! Sign Up Use Case
//!
//! Creates a new student account. No token is issued at this stage.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    email::Email,
    gender::Gender,
    major::Major,
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub grade: i16,
    pub major: Major,
    pub gender: Gender,
}

/// Sign up use case
pub struct SignUpUseCase<A>
where
    A: AccountRepository,
{
    accounts: Arc<A>,
    config: Arc<AuthConfig>,
}

impl<A> SignUpUseCase<A>
where
    A: AccountRepository,
{
    pub fn new(accounts: Arc<A>, config: Arc<AuthConfig>) -> Self {
        Self { accounts, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<()> {
        // Validate email
        let email = Email::new(input.email).map_err(|e| AuthError::Validation(e.to_string()))?;

        // The identity must not already be registered
        if self.accounts.exists_by_email(&email).await? {
            return Err(AuthError::DuplicateAccount);
        }

        // Validate and hash password
        let raw_password =
            RawPassword::new(input.password).map_err(|e| AuthError::PasswordValidation(e.to_string()))?;
        let password_hash = AccountPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let account = Account::new(
            email,
            password_hash,
            input.name,
            input.grade,
            input.major,
            input.gender,
        );

        self.accounts.create(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            email = %account.email,
            "Account signed up"
        );

        Ok(())
    }
}
