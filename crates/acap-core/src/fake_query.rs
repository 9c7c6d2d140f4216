//! In-memory capability query delegate for tests.
//!
//! # Example
//!
//! ```ignore
//! use acap_core::fake_query::FakeCapabilityQuery;
//! use acap_core::{fetch_account_capabilities, CapabilityResponse};
//!
//! let query = FakeCapabilityQuery::new()
//!     .with_all("user@example.com", CapabilityResponse::Yes);
//! let caps = fetch_account_capabilities(&query, "user@example.com");
//! assert!(caps.are_all_capabilities_known());
//! ```

use std::cell::Cell;
use std::collections::HashMap;

use acap_common::CapabilityResponse;

use crate::capabilities::supported_capability_names;
use crate::query::CapabilityQuery;

/// Answers from a fixed table; unset entries answer `Exception`.
#[derive(Debug, Default)]
pub struct FakeCapabilityQuery {
    responses: HashMap<(String, String), CapabilityResponse>,
    queries: Cell<usize>,
}

impl FakeCapabilityQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer for one account and capability name.
    pub fn set_response(&mut self, account: &str, name: &str, response: CapabilityResponse) {
        self.responses
            .insert((account.to_string(), name.to_string()), response);
    }

    /// Builder form of [`set_response`](Self::set_response).
    pub fn with_response(
        mut self,
        account: &str,
        name: &str,
        response: CapabilityResponse,
    ) -> Self {
        self.set_response(account, name, response);
        self
    }

    /// Answer `response` for every supported capability of `account`.
    pub fn with_all(mut self, account: &str, response: CapabilityResponse) -> Self {
        for name in supported_capability_names() {
            self.set_response(account, name, response);
        }
        self
    }

    /// Number of queries answered so far.
    pub fn query_count(&self) -> usize {
        self.queries.get()
    }
}

impl CapabilityQuery for FakeCapabilityQuery {
    fn query(&self, account: &str, capability_name: &str) -> CapabilityResponse {
        self.queries.set(self.queries.get() + 1);
        self.responses
            .get(&(account.to_string(), capability_name.to_string()))
            .copied()
            .unwrap_or(CapabilityResponse::Exception)
    }
}
