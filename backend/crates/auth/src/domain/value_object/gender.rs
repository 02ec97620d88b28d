use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum Gender {
    Man = 0,
    Woman = 1,
}

impl Gender {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Gender::Man => "MAN",
            Gender::Woman => "WOMAN",
        }
    }

    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            0 => Gender::Man,
            1 => Gender::Woman,
            _ => {
                tracing::error!("Invalid Gender id: {}", id);
                unreachable!("Invalid Gender id: {}", id)
            }
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_roundtrip() {
        assert_eq!(Gender::from_id(Gender::Man.id()), Gender::Man);
        assert_eq!(Gender::from_id(Gender::Woman.id()), Gender::Woman);
    }

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::Man.to_string(), "MAN");
        assert_eq!(Gender::Woman.to_string(), "WOMAN");
    }
}
