//! Error types for account capabilities.
//!
//! Errors carry:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - A short headline for human output
//!
//! Query failures reported by the account service are *not* errors here:
//! they arrive as [`CapabilityResponse::Exception`](crate::CapabilityResponse)
//! and are folded into the record by its merge policy.
//!
//! # Agent-Facing Output
//!
//! Errors serialize to structured JSON:
//! ```json
//! {
//!   "code": 10,
//!   "category": "registry",
//!   "message": "unknown capability name: accountcapabilities/zzzz",
//!   "context": { "name": "accountcapabilities/zzzz" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for account capability operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Caller and capability registry disagree.
    Registry,
    /// Raw numeric codes outside the documented range.
    Decode,
    /// Serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Registry => write!(f, "registry"),
            ErrorCategory::Decode => write!(f, "decode"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for account capabilities.
#[derive(Error, Debug)]
pub enum Error {
    // Registry errors (10-19)
    #[error("unknown capability name: {name}")]
    UnknownCapability { name: String },

    // Decode errors (20-29)
    #[error("invalid capability response code: {0}")]
    InvalidResponseCode(i32),

    #[error("invalid tribool code: {0}")]
    InvalidTriboolCode(i32),

    // I/O errors (30-39)
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Registry errors
    /// - 20-29: Decode errors
    /// - 30-39: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::UnknownCapability { .. } => 10,
            Error::InvalidResponseCode(_) => 20,
            Error::InvalidTriboolCode(_) => 21,
            Error::Json(_) => 30,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::UnknownCapability { .. } => ErrorCategory::Registry,
            Error::InvalidResponseCode(_) | Error::InvalidTriboolCode(_) => ErrorCategory::Decode,
            Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::UnknownCapability { .. } => "Unknown Capability",
            Error::InvalidResponseCode(_) => "Invalid Response Code",
            Error::InvalidTriboolCode(_) => "Invalid Tribool Code",
            Error::Json(_) => "JSON Error",
        }
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Additional structured context (e.g., capability name, raw code).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = HashMap::new();

        match err {
            Error::UnknownCapability { name } => {
                context.insert("name".to_string(), serde_json::json!(name));
            }
            Error::InvalidResponseCode(code) | Error::InvalidTriboolCode(code) => {
                context.insert("raw_code".to_string(), serde_json::json!(code));
            }
            Error::Json(_) => {}
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            context,
        }
    }
}

impl StructuredError {
    /// Add additional context to the error.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.context.insert(key.into(), v);
        }
        self
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = Error::UnknownCapability {
            name: "bogus".into(),
        };
        assert_eq!(err.code(), 10);
        assert_eq!(Error::InvalidResponseCode(7).code(), 20);
        assert_eq!(Error::InvalidTriboolCode(7).code(), 21);
    }

    #[test]
    fn test_error_category() {
        let err = Error::UnknownCapability {
            name: "bogus".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Registry);
        assert_eq!(Error::InvalidResponseCode(9).category(), ErrorCategory::Decode);
        assert_eq!(Error::InvalidTriboolCode(9).category(), ErrorCategory::Decode);
    }

    #[test]
    fn test_json_error_from() {
        let parse_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = parse_err.into();
        assert_eq!(err.code(), 30);
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.headline(), "JSON Error");
    }

    #[test]
    fn test_structured_error_from_error() {
        let err = Error::UnknownCapability {
            name: "accountcapabilities/zzzz".into(),
        };
        let structured = StructuredError::from(&err);

        assert_eq!(structured.code, 10);
        assert_eq!(structured.category, ErrorCategory::Registry);
        assert_eq!(
            structured.context.get("name"),
            Some(&serde_json::json!("accountcapabilities/zzzz"))
        );
    }

    #[test]
    fn test_structured_error_json() {
        let structured = StructuredError::from(&Error::InvalidResponseCode(5))
            .with_context("account", "user@example.com");
        let json = structured.to_json();

        assert!(json.contains(r#""code":20"#));
        assert!(json.contains(r#""category":"decode""#));
        assert!(json.contains(r#""raw_code":5"#));
        assert!(json.contains(r#""account":"user@example.com""#));
    }

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Registry.to_string(), "registry");
        assert_eq!(ErrorCategory::Decode.to_string(), "decode");
    }
}
