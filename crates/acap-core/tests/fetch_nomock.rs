//! Fetch-path tests through the fake query delegate.

use acap_core::fake_query::FakeCapabilityQuery;
use acap_core::{
    fetch_account_capabilities, Capability, CapabilityQuery, CapabilityResponse, Tribool,
};

const ACCOUNT: &str = "child@example.com";

/// Delegate that answers from a script keyed by call number.
struct ScriptedQuery {
    answers: Vec<CapabilityResponse>,
    calls: std::cell::Cell<usize>,
}

impl CapabilityQuery for ScriptedQuery {
    fn query(&self, _account: &str, _capability_name: &str) -> CapabilityResponse {
        let i = self.calls.get();
        self.calls.set(i + 1);
        self.answers
            .get(i)
            .copied()
            .unwrap_or(CapabilityResponse::Exception)
    }
}

#[test]
fn test_fetch_all_yes() {
    let query = FakeCapabilityQuery::new().with_all(ACCOUNT, CapabilityResponse::Yes);
    let caps = fetch_account_capabilities(&query, ACCOUNT);

    assert!(caps.are_all_capabilities_known());
    for (_, value) in caps.iter() {
        assert_eq!(value, Tribool::True);
    }
}

#[test]
fn test_fetch_all_failures_are_unknown() {
    let query = FakeCapabilityQuery::new();
    let caps = fetch_account_capabilities(&query, ACCOUNT);

    assert!(!caps.are_any_capabilities_known());
    assert_eq!(query.query_count(), Capability::ALL.len());
}

#[test]
fn test_refetch_after_outage_keeps_previous_answers() {
    let mut query = FakeCapabilityQuery::new();
    query.set_response(
        ACCOUNT,
        Capability::IsSubjectToParentalControls.name(),
        CapabilityResponse::Yes,
    );
    let mut caps = fetch_account_capabilities(&query, ACCOUNT);
    assert_eq!(caps.is_subject_to_parental_controls(), Tribool::True);

    // Service outage: every query now fails.
    let outage = FakeCapabilityQuery::new();
    let refreshed = fetch_account_capabilities(&outage, ACCOUNT);

    assert!(!caps.update_with(&refreshed));
    assert_eq!(caps.is_subject_to_parental_controls(), Tribool::True);
}

#[test]
fn test_fetch_queries_in_registry_order() {
    let query = ScriptedQuery {
        answers: vec![
            CapabilityResponse::No,
            CapabilityResponse::Yes,
            CapabilityResponse::Exception,
        ],
        calls: std::cell::Cell::new(0),
    };

    let caps = fetch_account_capabilities(&query, ACCOUNT);
    assert_eq!(caps.get(Capability::ALL[0]), Tribool::False);
    assert_eq!(caps.get(Capability::ALL[1]), Tribool::True);
    assert_eq!(caps.get(Capability::ALL[2]), Tribool::Unknown);
}
