//! Three-valued logical type for capability results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// A boolean that may not have been determined yet.
///
/// Numeric codes match the account service's wire values:
/// `Unknown = -1`, `False = 0`, `True = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tribool {
    /// Never queried, or every query so far has failed.
    #[default]
    Unknown,
    False,
    True,
}

impl Tribool {
    /// Stable numeric code.
    pub fn code(self) -> i32 {
        match self {
            Tribool::Unknown => -1,
            Tribool::False => 0,
            Tribool::True => 1,
        }
    }

    /// `Some(bool)` for a definitive value, `None` for `Unknown`.
    pub fn to_option(self) -> Option<bool> {
        match self {
            Tribool::Unknown => None,
            Tribool::False => Some(false),
            Tribool::True => Some(true),
        }
    }

    /// Whether this value is `True` or `False`.
    pub fn is_known(self) -> bool {
        !matches!(self, Tribool::Unknown)
    }
}

impl From<bool> for Tribool {
    fn from(value: bool) -> Self {
        if value {
            Tribool::True
        } else {
            Tribool::False
        }
    }
}

impl From<Option<bool>> for Tribool {
    fn from(value: Option<bool>) -> Self {
        value.map(Tribool::from).unwrap_or_default()
    }
}

impl TryFrom<i32> for Tribool {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Tribool::Unknown),
            0 => Ok(Tribool::False),
            1 => Ok(Tribool::True),
            other => Err(Error::InvalidTriboolCode(other)),
        }
    }
}

impl fmt::Display for Tribool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tribool::Unknown => write!(f, "unknown"),
            Tribool::False => write!(f, "false"),
            Tribool::True => write!(f, "true"),
        }
    }
}
