// ── Attribute descriptors ──
//
// Static, per-variant schema entries. The same descriptor drives input
// parsing, wire decoding, reconciliation, and add-request encoding, so all
// four always agree on an attribute's type.

use serde::Serialize;

use super::value::AttributeKind;

/// Whether the caller must, may, or cannot supply an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Definedness {
    Required,
    Optional,
    /// Server-owned. Read back, never sent.
    Computed,
}

/// One attribute of a plugin variant's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Wire identifier (kebab-case).
    pub name: &'static str,
    pub kind: AttributeKind,
    pub definedness: Definedness,
    /// Masked in human-readable output.
    pub sensitive: bool,
}

impl AttributeDescriptor {
    pub const fn required(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            definedness: Definedness::Required,
            sensitive: false,
        }
    }

    pub const fn optional(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            definedness: Definedness::Optional,
            sensitive: false,
        }
    }

    pub const fn computed(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            definedness: Definedness::Computed,
            sensitive: false,
        }
    }

    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn is_computed(&self) -> bool {
        self.definedness == Definedness::Computed
    }
}
