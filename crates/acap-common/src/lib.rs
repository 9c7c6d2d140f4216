//! Account capability shared types and errors.
//!
//! This crate provides the vocabulary shared by acap-core and its callers:
//! - The tri-state value type for resolved capabilities
//! - Raw response codes reported by the account service delegate
//! - Common error types

pub mod error;
pub mod response;
pub mod tribool;

pub use error::{Error, ErrorCategory, Result, StructuredError};
pub use response::CapabilityResponse;
pub use tribool::Tribool;
