//! Typed snapshot of an account's capabilities.

use acap_common::{CapabilityResponse, Error, Result, Tribool};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::registry::{Capability, CAPABILITY_COUNT};

/// One tri-state value per registry capability.
///
/// A fresh record reads [`Tribool::Unknown`] everywhere. Values only change
/// through [`set`](Self::set), [`set_capability`](Self::set_capability) and
/// [`update_with`](Self::update_with); none of them take a lock, so callers
/// that mutate a shared record must synchronize externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccountCapabilities {
    values: [Tribool; CAPABILITY_COUNT],
}

impl AccountCapabilities {
    /// Create a record with every capability unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from raw per-name query responses.
    ///
    /// Entries are applied in iteration order, so repeated entries for one
    /// name follow the merge policy of [`set`](Self::set). Registry names
    /// absent from `responses` stay unknown. Names outside the registry are
    /// skipped: the account service may report capabilities this build does
    /// not know about.
    pub fn parse_from_capabilities_response<I, K>(responses: I) -> Self
    where
        I: IntoIterator<Item = (K, CapabilityResponse)>,
        K: AsRef<str>,
    {
        let mut capabilities = Self::new();
        let mut applied = 0usize;
        let mut ignored = 0usize;

        for (name, response) in responses {
            let name = name.as_ref();
            match Capability::from_name(name) {
                Some(capability) => {
                    capabilities.set(capability, response);
                    applied += 1;
                }
                None => {
                    tracing::debug!(name, "ignoring unrecognized capability in response");
                    ignored += 1;
                }
            }
        }

        tracing::debug!(
            applied,
            ignored,
            known = capabilities.known_count(),
            "parsed capabilities response"
        );
        capabilities
    }

    /// Apply a raw response for a capability name.
    ///
    /// Returns [`Error::UnknownCapability`] if `name` is not in the registry;
    /// the record is left untouched in that case.
    pub fn set_capability(&mut self, name: &str, response: CapabilityResponse) -> Result<()> {
        let capability = Capability::from_name(name).ok_or_else(|| Error::UnknownCapability {
            name: name.to_string(),
        })?;
        self.set(capability, response);
        Ok(())
    }

    /// Apply a raw response to one capability.
    ///
    /// `Yes` and `No` always overwrite. `Exception` never replaces a
    /// definitive value; it only leaves an unknown value unknown.
    pub fn set(&mut self, capability: Capability, response: CapabilityResponse) {
        let slot = &mut self.values[capability.index()];
        let previous = *slot;
        let current = match response {
            CapabilityResponse::Yes | CapabilityResponse::No => response.to_tribool(),
            CapabilityResponse::Exception => previous,
        };
        *slot = current;
        tracing::trace!(
            capability = capability.name(),
            %response,
            %previous,
            %current,
            "applied capability response"
        );
    }

    /// Current value of a capability.
    pub fn get(&self, capability: Capability) -> Tribool {
        self.values[capability.index()]
    }

    /// Whether extended sync promos may be shown to the account.
    pub fn can_offer_extended_sync_promos(&self) -> Tribool {
        self.get(Capability::CanOfferExtendedSyncPromos)
    }

    /// Whether privacy sandbox trials may run for the account.
    pub fn can_run_privacy_sandbox_trials(&self) -> Tribool {
        self.get(Capability::CanRunPrivacySandboxTrials)
    }

    /// Whether the account is supervised by parental controls.
    pub fn is_subject_to_parental_controls(&self) -> Tribool {
        self.get(Capability::IsSubjectToParentalControls)
    }

    /// Copy every known value from `other` into `self`.
    ///
    /// Unknown values in `other` are skipped, so a known value is never
    /// regressed. Returns whether any value changed.
    pub fn update_with(&mut self, other: &AccountCapabilities) -> bool {
        let mut changed = false;
        for (capability, value) in other.iter() {
            if value.is_known() && self.get(capability) != value {
                self.values[capability.index()] = value;
                changed = true;
            }
        }
        changed
    }

    /// Whether at least one capability has a definitive value.
    pub fn are_any_capabilities_known(&self) -> bool {
        self.values.iter().any(|v| v.is_known())
    }

    /// Whether every capability has a definitive value.
    pub fn are_all_capabilities_known(&self) -> bool {
        self.values.iter().all(|v| v.is_known())
    }

    /// `(capability, value)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Capability, Tribool)> + '_ {
        Capability::iter().map(move |capability| (capability, self.get(capability)))
    }

    fn known_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_known()).count()
    }
}

impl Serialize for AccountCapabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CAPABILITY_COUNT))?;
        for (capability, value) in self.iter() {
            map.serialize_entry(capability.name(), &value)?;
        }
        map.end()
    }
}
