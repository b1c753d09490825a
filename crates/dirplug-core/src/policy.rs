// ── Emptiness / definedness policy ──
//
// The desired-state model cannot tell "field omitted" from "field set to
// the empty string", and the server reports unset scalars by leaving them
// out. These rules put both sides in one vocabulary before comparison.

use crate::model::{AttributeKind, AttributeValue, PlanValue};

/// `true` unless the caller deferred the attribute to the server.
pub fn is_defined(value: &PlanValue) -> bool {
    !matches!(value, PlanValue::Unknown)
}

/// `true` unless the value is the empty string.
pub fn is_non_empty_string(value: &AttributeValue) -> bool {
    !matches!(value, AttributeValue::String(s) if s.is_empty())
}

/// Canonical "no value" form for an attribute kind.
pub fn empty_for(kind: AttributeKind) -> AttributeValue {
    if kind.is_set() {
        AttributeValue::Set(std::collections::BTreeSet::new())
    } else {
        AttributeValue::Absent
    }
}

/// Collapse the different spellings of "no value" into one.
///
/// Empty strings become `Absent`; `Absent` on a set-valued attribute
/// becomes the empty set.
pub fn normalize(kind: AttributeKind, value: &AttributeValue) -> AttributeValue {
    if value.is_absent() || !is_non_empty_string(value) {
        empty_for(kind)
    } else {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_is_not_defined() {
        assert!(!is_defined(&PlanValue::Unknown));
        assert!(is_defined(&PlanValue::Known(AttributeValue::Absent)));
        assert!(is_defined(&PlanValue::Known(AttributeValue::String(String::new()))));
    }

    #[test]
    fn empty_string_is_empty() {
        assert!(!is_non_empty_string(&AttributeValue::String(String::new())));
        assert!(is_non_empty_string(&AttributeValue::String("x".into())));
        assert!(is_non_empty_string(&AttributeValue::Bool(false)));
    }

    #[test]
    fn normalize_collapses_empty_forms() {
        assert_eq!(
            normalize(AttributeKind::String, &AttributeValue::String(String::new())),
            AttributeValue::Absent
        );
        assert_eq!(
            normalize(AttributeKind::StringSet, &AttributeValue::Absent),
            AttributeValue::set(Vec::<String>::new())
        );
        assert_eq!(
            normalize(AttributeKind::Int, &AttributeValue::Int(0)),
            AttributeValue::Int(0)
        );
    }
}
