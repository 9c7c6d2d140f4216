//! Account capability registry and typed capability snapshots.
//!
//! This module provides:
//! - The fixed registry of capability names the account service reports
//! - [`AccountCapabilities`], a tri-state value per registry capability
//! - The merge policy that folds raw query responses into that record

mod record;
mod registry;

pub use record::AccountCapabilities;
pub use registry::{supported_capability_names, Capability, CAPABILITY_COUNT};
