use serde::{Deserialize, Serialize};
use std::fmt;

/// Department a student belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i16)]
pub enum Major {
    SwDevelop = 0,
    SmartIot = 1,
    Ai = 2,
}

impl Major {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Major::*;
        match self {
            SwDevelop => "SW_DEVELOP",
            SmartIot => "SMART_IOT",
            Ai => "AI",
        }
    }

    #[inline]
    pub fn from_id(id: i16) -> Self {
        use Major::*;
        match id {
            0 => SwDevelop,
            1 => SmartIot,
            2 => Ai,
            _ => {
                tracing::error!("Invalid Major id: {}", id);
                unreachable!("Invalid Major id: {}", id)
            }
        }
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
