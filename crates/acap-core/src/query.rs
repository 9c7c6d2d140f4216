//! Seam to the account service that answers capability queries.
//!
//! The service itself (transport, retries, scheduling) lives outside this
//! crate. [`fetch_account_capabilities`] asks a [`CapabilityQuery`] once per
//! registry capability and folds the answers into a record.

use acap_common::CapabilityResponse;

use crate::capabilities::{AccountCapabilities, Capability};

/// Answers a single capability question for an account.
pub trait CapabilityQuery {
    /// Query `capability_name` for `account`.
    ///
    /// Failures of any kind are reported as [`CapabilityResponse::Exception`].
    fn query(&self, account: &str, capability_name: &str) -> CapabilityResponse;
}

impl<Q: CapabilityQuery + ?Sized> CapabilityQuery for &Q {
    fn query(&self, account: &str, capability_name: &str) -> CapabilityResponse {
        (**self).query(account, capability_name)
    }
}

/// Query every registry capability for `account` and build a record.
///
/// Each capability is queried exactly once, in registry order.
pub fn fetch_account_capabilities<Q>(query: &Q, account: &str) -> AccountCapabilities
where
    Q: CapabilityQuery + ?Sized,
{
    let responses: Vec<(&'static str, CapabilityResponse)> = Capability::iter()
        .map(|capability| {
            let name = capability.name();
            (name, query.query(account, name))
        })
        .collect();

    let failed = responses
        .iter()
        .filter(|(_, response)| !response.is_definitive())
        .count();
    tracing::debug!(
        failed,
        total = responses.len(),
        "queried account capabilities"
    );

    AccountCapabilities::parse_from_capabilities_response(responses)
}
