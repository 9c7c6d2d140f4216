//! The closed set of capability names this crate understands.
//!
//! Each capability is a tag used to index the record's storage. Adding a
//! capability means adding a variant, a row in [`CAPABILITY_NAMES`], and an
//! accessor on the record; name dispatch itself is table driven.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use acap_common::Error;
use serde::{Serialize, Serializer};

/// Number of capabilities in the registry.
pub const CAPABILITY_COUNT: usize = 3;

const _: () = assert!(CAPABILITY_COUNT > 0, "capability registry must not be empty");

/// Account service names, indexed by [`Capability`] discriminant.
const CAPABILITY_NAMES: [&str; CAPABILITY_COUNT] = [
    "accountcapabilities/gi2tklldmfya",
    "accountcapabilities/gu2dqlldmfya",
    "accountcapabilities/guydolldmfya",
];

static NAME_INDEX: OnceLock<HashMap<&'static str, Capability>> = OnceLock::new();

/// A recognized account capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Whether extended sync promos may be shown to the account.
    CanOfferExtendedSyncPromos = 0,
    /// Whether privacy sandbox trials may run for the account.
    CanRunPrivacySandboxTrials = 1,
    /// Whether the account is supervised by parental controls.
    IsSubjectToParentalControls = 2,
}

impl Capability {
    /// Every capability, in registry order.
    pub const ALL: [Capability; CAPABILITY_COUNT] = [
        Capability::CanOfferExtendedSyncPromos,
        Capability::CanRunPrivacySandboxTrials,
        Capability::IsSubjectToParentalControls,
    ];

    /// Iterate the registry in order.
    pub fn iter() -> impl Iterator<Item = Capability> {
        Self::ALL.into_iter()
    }

    /// The account service name for this capability.
    pub fn name(self) -> &'static str {
        CAPABILITY_NAMES[self.index()]
    }

    /// Look up a capability by its account service name.
    pub fn from_name(name: &str) -> Option<Capability> {
        name_index().get(name).copied()
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

fn name_index() -> &'static HashMap<&'static str, Capability> {
    NAME_INDEX.get_or_init(|| {
        Capability::iter()
            .map(|capability| (capability.name(), capability))
            .collect()
    })
}

/// Names of every supported capability, in registry order.
pub fn supported_capability_names() -> &'static [&'static str] {
    &CAPABILITY_NAMES
}

impl FromStr for Capability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::from_name(s).ok_or_else(|| Error::UnknownCapability {
            name: s.to_string(),
        })
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Capability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
