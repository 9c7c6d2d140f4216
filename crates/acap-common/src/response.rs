//! Raw per-capability query results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;
use crate::tribool::Tribool;

/// Result code of a single capability query attempt.
///
/// Numeric codes match the account service delegate:
/// `Exception = 0`, `Yes = 1`, `No = 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityResponse {
    /// The query failed (timeout, permission error, unsupported). Carries no
    /// information about the true value.
    Exception,
    Yes,
    No,
}

impl CapabilityResponse {
    /// Stable numeric code.
    pub fn code(self) -> i32 {
        match self {
            CapabilityResponse::Exception => 0,
            CapabilityResponse::Yes => 1,
            CapabilityResponse::No => 2,
        }
    }

    /// The tri-state this response resolves to on its own.
    pub fn to_tribool(self) -> Tribool {
        match self {
            CapabilityResponse::Yes => Tribool::True,
            CapabilityResponse::No => Tribool::False,
            CapabilityResponse::Exception => Tribool::Unknown,
        }
    }

    /// Whether this response is a definitive answer.
    pub fn is_definitive(self) -> bool {
        !matches!(self, CapabilityResponse::Exception)
    }
}

impl TryFrom<i32> for CapabilityResponse {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CapabilityResponse::Exception),
            1 => Ok(CapabilityResponse::Yes),
            2 => Ok(CapabilityResponse::No),
            other => Err(Error::InvalidResponseCode(other)),
        }
    }
}

impl fmt::Display for CapabilityResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityResponse::Exception => write!(f, "exception"),
            CapabilityResponse::Yes => write!(f, "yes"),
            CapabilityResponse::No => write!(f, "no"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_tribool() {
        assert_eq!(CapabilityResponse::Yes.to_tribool(), Tribool::True);
        assert_eq!(CapabilityResponse::No.to_tribool(), Tribool::False);
        assert_eq!(CapabilityResponse::Exception.to_tribool(), Tribool::Unknown);
    }

    #[test]
    fn test_decode_known_codes() {
        assert_eq!(CapabilityResponse::try_from(0).unwrap(), CapabilityResponse::Exception);
        assert_eq!(CapabilityResponse::try_from(1).unwrap(), CapabilityResponse::Yes);
        assert_eq!(CapabilityResponse::try_from(2).unwrap(), CapabilityResponse::No);
    }

    #[test]
    fn test_decode_rejects_unknown_codes() {
        for code in [-1, 3, 42, i32::MIN, i32::MAX] {
            let err = CapabilityResponse::try_from(code).unwrap_err();
            assert!(matches!(err, Error::InvalidResponseCode(c) if c == code));
        }
    }

    #[test]
    fn test_is_definitive() {
        assert!(CapabilityResponse::Yes.is_definitive());
        assert!(CapabilityResponse::No.is_definitive());
        assert!(!CapabilityResponse::Exception.is_definitive());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CapabilityResponse::Exception).unwrap();
        assert_eq!(json, "\"exception\"");
        let parsed: CapabilityResponse = serde_json::from_str("\"yes\"").unwrap();
        assert_eq!(parsed, CapabilityResponse::Yes);
    }
}
