// ── Attribute value model ──
//
// Typed values for a single configuration attribute. Enumerations are
// stored as their canonical wire spelling, so equality is always
// wire-level equality.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── EnumDomain ──────────────────────────────────────────────────────

/// A closed set of canonical wire values for an enumeration-backed attribute.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumDomain {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

impl EnumDomain {
    /// Map caller or server input to the canonical spelling.
    ///
    /// Matching ignores ASCII case and surrounding whitespace; the returned
    /// value is always the domain's own spelling.
    pub fn canonicalize(&self, raw: &str) -> Option<&'static str> {
        let raw = raw.trim();
        self.values
            .iter()
            .copied()
            .find(|v| v.eq_ignore_ascii_case(raw))
    }

    /// Allowed values joined for error messages.
    pub fn allowed(&self) -> String {
        self.values.join(", ")
    }
}

// ── AttributeKind ───────────────────────────────────────────────────

/// The value shape of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    Bool,
    Int,
    StringSet,
    Enum(&'static EnumDomain),
    EnumSet(&'static EnumDomain),
}

impl AttributeKind {
    pub fn is_set(self) -> bool {
        matches!(self, Self::StringSet | Self::EnumSet(_))
    }

    pub fn domain(self) -> Option<&'static EnumDomain> {
        match self {
            Self::Enum(d) | Self::EnumSet(d) => Some(d),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::StringSet => "string-set",
            Self::Enum(_) => "enum",
            Self::EnumSet(_) => "enum-set",
        }
    }
}

// ── AttributeValue ──────────────────────────────────────────────────

/// A concrete attribute value, as read from the server or declared by the caller.
///
/// `Absent` is the "no value" state of a scalar. Set-valued attributes use
/// an empty `Set` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Absent,
    Bool(bool),
    Int(i64),
    String(String),
    Set(BTreeSet<String>),
}

impl AttributeValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Set(s) => Some(s),
            _ => None,
        }
    }

    /// Build a set value from any iterator of strings.
    pub fn set<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Set(items.into_iter().map(Into::into).collect())
    }

    /// Wire values for a modify operation.
    ///
    /// Sets come out sorted; `Absent` yields no values.
    pub fn render(&self) -> Vec<String> {
        match self {
            Self::Absent => Vec::new(),
            Self::Bool(b) => vec![b.to_string()],
            Self::Int(i) => vec![i.to_string()],
            Self::String(s) => vec![s.clone()],
            Self::Set(s) => s.iter().cloned().collect(),
        }
    }

    /// JSON form for add requests.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Absent => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::from(*i),
            Self::String(s) => Value::String(s.clone()),
            Self::Set(s) => Value::Array(s.iter().cloned().map(Value::String).collect()),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "-"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Set(s) => {
                let items: Vec<&str> = s.iter().map(String::as_str).collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

// ── PlanValue ───────────────────────────────────────────────────────

/// The caller's intent for one attribute of a desired snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanValue {
    /// Deferred to the server: never compared, never sent.
    Unknown,
    Known(AttributeValue),
}
