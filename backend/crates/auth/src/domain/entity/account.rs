//! Account Entity
//!
//! A registered student account. The email address is the unique
//! identity; the password is only ever held as an Argon2id hash.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;

use crate::domain::value_object::{
    account_password::AccountPassword, authority::Authority, email::Email, gender::Gender,
    major::Major,
};

/// Account entity
///
/// Created at sign-up, read at sign-in/reissue, hard-deleted at
/// withdrawal.
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Unique identity (school email)
    pub email: Email,
    /// Argon2id PHC hash of the password
    pub password_hash: AccountPassword,
    /// Student name
    pub name: String,
    /// Grade (school year)
    pub grade: i16,
    /// Department
    pub major: Major,
    /// Gender
    pub gender: Gender,
    /// Role classification
    pub authority: Authority,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    ///
    /// New accounts always start with `Authority::RoleStudent`;
    /// elevated roles are assigned out of band.
    pub fn new(
        email: Email,
        password_hash: AccountPassword,
        name: String,
        grade: i16,
        major: Major,
        gender: Gender,
    ) -> Self {
        Self {
            account_id: AccountId::new(),
            email,
            password_hash,
            name,
            grade,
            major,
            gender,
            authority: Authority::default(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::account_password::RawPassword;

    fn test_account() -> Account {
        let email = Email::new("s22039@school.hs.kr").unwrap();
        let raw = RawPassword::new("gomstest1234!".to_string()).unwrap();
        let hash = AccountPassword::from_raw(&raw, None).unwrap();
        Account::new(email, hash, "김경수".to_string(), 2, Major::SmartIot, Gender::Man)
    }

    #[test]
    fn test_new_account_defaults_to_student() {
        let account = test_account();
        assert_eq!(account.authority, Authority::RoleStudent);
    }

    #[test]
    fn test_new_accounts_get_distinct_ids() {
        let a = test_account();
        let b = test_account();
        assert_ne!(a.account_id, b.account_id);
    }
}
