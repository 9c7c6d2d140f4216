//! Fuzz target for capability response parsing.
//!
//! Feeds arbitrary name/code pairs through raw-code decoding and the bulk
//! parser, and checks that unknown names and failed queries never produce
//! a definitive value out of nothing.

#![no_main]

use acap_common::CapabilityResponse;
use acap_core::{AccountCapabilities, Capability};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Entry {
    /// Index into the registry, or a free-form name when out of range.
    slot: u8,
    name: String,
    code: i32,
}

fuzz_target!(|entries: Vec<Entry>| {
    let mut decoded = Vec::with_capacity(entries.len());
    for entry in entries {
        // Invalid codes must be rejected, never coerced.
        let Ok(response) = CapabilityResponse::try_from(entry.code) else {
            assert!(!(0..=2).contains(&entry.code));
            continue;
        };
        let name = match Capability::ALL.get(entry.slot as usize) {
            Some(capability) => capability.name().to_string(),
            None => entry.name,
        };
        decoded.push((name, response));
    }

    let caps = AccountCapabilities::parse_from_capabilities_response(decoded.clone());

    for (capability, value) in caps.iter() {
        let last_definitive = decoded
            .iter()
            .rev()
            .filter(|(name, _)| name == capability.name())
            .find(|(_, response)| response.is_definitive())
            .map(|(_, response)| response.to_tribool());
        assert_eq!(value.to_option(), last_definitive.and_then(|v| v.to_option()));
    }
});
