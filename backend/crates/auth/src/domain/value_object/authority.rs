use serde::{Deserialize, Serialize};
use std::fmt;

/// Role classification attached to an account.
///
/// Every account carries exactly one authority; new sign-ups default
/// to `RoleStudent`. The authority is embedded in access-token claims
/// and echoed back in token responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum Authority {
    #[default]
    RoleStudent = 0,
    RoleStudentCouncil = 1,
    RoleAdmin = 2,
}

impl Authority {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Authority::*;
        match self {
            RoleStudent => "ROLE_STUDENT",
            RoleStudentCouncil => "ROLE_STUDENT_COUNCIL",
            RoleAdmin => "ROLE_ADMIN",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Authority::RoleAdmin)
    }

    #[inline]
    pub fn from_id(id: i16) -> Self {
        use Authority::*;
        match id {
            0 => RoleStudent,
            1 => RoleStudentCouncil,
            2 => RoleAdmin,
            _ => {
                tracing::error!("Invalid Authority id: {}", id);
                unreachable!("Invalid Authority id: {}", id)
            }
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Authority::*;
        match code {
            "ROLE_STUDENT" => Some(RoleStudent),
            "ROLE_STUDENT_COUNCIL" => Some(RoleStudentCouncil),
            "ROLE_ADMIN" => Some(RoleAdmin),
            _ => None,
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_from_id() {
        assert_eq!(Authority::from_id(0), Authority::RoleStudent);
        assert_eq!(Authority::from_id(1), Authority::RoleStudentCouncil);
        assert_eq!(Authority::from_id(2), Authority::RoleAdmin);
    }

    #[test]
    fn test_authority_from_code() {
        assert_eq!(
            Authority::from_code("ROLE_STUDENT"),
            Some(Authority::RoleStudent)
        );
        assert_eq!(
            Authority::from_code("ROLE_STUDENT_COUNCIL"),
            Some(Authority::RoleStudentCouncil)
        );
        assert_eq!(Authority::from_code("ROLE_ADMIN"), Some(Authority::RoleAdmin));
        assert_eq!(Authority::from_code("ROLE_TEACHER"), None);
    }

    #[test]
    fn test_authority_display() {
        assert_eq!(Authority::RoleStudent.to_string(), "ROLE_STUDENT");
        assert_eq!(
            Authority::RoleStudentCouncil.to_string(),
            "ROLE_STUDENT_COUNCIL"
        );
        assert_eq!(Authority::RoleAdmin.to_string(), "ROLE_ADMIN");
    }

    #[test]
    fn test_default_is_student() {
        assert_eq!(Authority::default(), Authority::RoleStudent);
        assert!(!Authority::RoleStudent.is_admin());
        assert!(Authority::RoleAdmin.is_admin());
    }
}
