//! Account capabilities core library.
//!
//! This library turns raw capability query results into a typed snapshot:
//! - The capability registry and tri-state capability record
//! - The merge policy for repeated and failed queries
//! - A query seam for the account service delegate
//! - Structured logging setup

pub mod capabilities;
pub mod logging;
pub mod query;

pub use acap_common::{CapabilityResponse, Error, Result, Tribool};
pub use capabilities::{supported_capability_names, AccountCapabilities, Capability};
pub use query::{fetch_account_capabilities, CapabilityQuery};

// Re-export test utilities for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod fake_query;
