// ── Desired and observed snapshots ──
//
// Both are ordered by the variant's schema and can only be built through
// the registry, which validates every value against its descriptor.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::{AttributeValue, PlanValue};
use crate::registry::PluginKind;

// ── DesiredSnapshot ─────────────────────────────────────────────────

/// The caller-declared target configuration for one object (the plan).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesiredSnapshot {
    pub(crate) values: IndexMap<&'static str, PlanValue>,
}

impl DesiredSnapshot {
    pub fn get(&self, attribute: &str) -> Option<&PlanValue> {
        self.values.get(attribute)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PlanValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Attributes the caller actually declared (not deferred).
    pub fn defined(&self) -> impl Iterator<Item = (&'static str, &AttributeValue)> {
        self.values.iter().filter_map(|(k, v)| match v {
            PlanValue::Known(value) => Some((*k, value)),
            PlanValue::Unknown => None,
        })
    }
}

// ── ObservedSnapshot ────────────────────────────────────────────────

/// The last configuration read back from the server (the state).
///
/// Fully populated: every attribute of the variant has an entry, with
/// `Absent` or an empty set standing in for "no value".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservedSnapshot {
    pub(crate) values: IndexMap<String, AttributeValue>,
}

impl ObservedSnapshot {
    pub fn get(&self, attribute: &str) -> Option<&AttributeValue> {
        self.values.get(attribute)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ── Plugins ─────────────────────────────────────────────────────────

/// A desired plugin: identity, variant, and plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredPlugin {
    pub id: String,
    pub kind: PluginKind,
    pub attributes: DesiredSnapshot,
}

/// A decoded plugin: identity, variant, and observed state.
///
/// Immutable once decoded; rebuilt on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservedPlugin {
    pub id: String,
    pub kind: PluginKind,
    pub attributes: ObservedSnapshot,
}

impl ObservedPlugin {
    /// The `resourceType` label: the variant's canonical name.
    pub fn resource_type(&self) -> &'static str {
        self.kind.name()
    }
}
