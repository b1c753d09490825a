// ── Reconciliation engine ──
//
// Diffs a desired snapshot against an observed one and emits the modify
// operations that converge the server. Attributes the caller deferred are
// never mentioned, so server-side defaults and out-of-band values survive.

use std::collections::BTreeSet;

use crate::model::{AttributeKind, AttributeValue, DesiredSnapshot, ObservedSnapshot, PlanValue};
use crate::operation::{Operation, OperationKind};
use crate::policy;
use crate::registry::VariantDescriptor;

/// Compute the ordered operation list that turns `state` into `plan`.
///
/// Operations follow the variant's attribute order. An empty list means
/// the object has already converged.
pub fn reconcile(
    variant: &VariantDescriptor,
    plan: &DesiredSnapshot,
    state: &ObservedSnapshot,
) -> Vec<Operation> {
    let mut ops = Vec::new();

    for attr in variant.attributes {
        if attr.is_computed() {
            continue;
        }
        let desired = match plan.get(attr.name) {
            Some(PlanValue::Known(value)) => policy::normalize(attr.kind, value),
            Some(PlanValue::Unknown) | None => continue,
        };
        let current = state
            .get(attr.name)
            .map_or_else(|| policy::empty_for(attr.kind), |v| policy::normalize(attr.kind, v));

        if attr.kind.is_set() {
            diff_set(attr.name, &desired, &current, &mut ops);
        } else if desired != current {
            ops.push(Operation::replace(attr.name, desired.render()));
        }
    }

    ops
}

/// Element-level set diff: one `add` and/or one `delete`, never `replace`.
fn diff_set(name: &str, desired: &AttributeValue, current: &AttributeValue, ops: &mut Vec<Operation>) {
    let empty = BTreeSet::new();
    let want = desired.as_set().unwrap_or(&empty);
    let have = current.as_set().unwrap_or(&empty);

    let added: Vec<String> = want.difference(have).cloned().collect();
    let removed: Vec<String> = have.difference(want).cloned().collect();

    if !added.is_empty() {
        ops.push(Operation::add(name, added));
    }
    if !removed.is_empty() {
        ops.push(Operation::delete(name, removed));
    }
}

/// Apply an operation list to an observed snapshot, the way the server would.
///
/// Operations naming attributes outside the variant are skipped.
pub fn apply(variant: &VariantDescriptor, state: &ObservedSnapshot, ops: &[Operation]) -> ObservedSnapshot {
    let mut next = state.clone();

    for op in ops {
        let Some(attr) = variant.attribute(&op.attribute) else {
            continue;
        };
        let slot = next
            .values
            .entry(op.attribute.clone())
            .or_insert_with(|| policy::empty_for(attr.kind));

        match (op.kind, slot) {
            (OperationKind::Add, AttributeValue::Set(set)) => {
                set.extend(op.values.iter().cloned());
            }
            (OperationKind::Delete, AttributeValue::Set(set)) => {
                for value in &op.values {
                    set.remove(value);
                }
            }
            (OperationKind::Delete, slot) => *slot = AttributeValue::Absent,
            (OperationKind::Replace | OperationKind::Add, slot) => {
                *slot = from_wire(attr.kind, &op.values);
            }
        }
    }

    next
}

fn from_wire(kind: AttributeKind, values: &[String]) -> AttributeValue {
    if kind.is_set() {
        return AttributeValue::set(values.iter().cloned());
    }
    let Some(first) = values.first() else {
        return AttributeValue::Absent;
    };
    match kind {
        AttributeKind::Bool => first
            .parse()
            .map_or_else(|_| AttributeValue::String(first.clone()), AttributeValue::Bool),
        AttributeKind::Int => first
            .parse()
            .map_or_else(|_| AttributeValue::String(first.clone()), AttributeValue::Int),
        _ => AttributeValue::String(first.clone()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::registry::{PluginKind, desired_from_input, observed_from_attributes};
    use pretty_assertions::assert_eq;
    use serde_json::{Map, Value, json};

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn plan(kind: PluginKind, value: Value) -> DesiredSnapshot {
        desired_from_input(kind, &map(value)).unwrap()
    }

    fn state(kind: PluginKind, value: Value) -> ObservedSnapshot {
        observed_from_attributes(kind, &map(value)).unwrap()
    }

    fn rendered(ops: &[Operation]) -> Vec<String> {
        ops.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn scalar_replace_and_set_delete() {
        let kind = PluginKind::SevenBitClean;
        let ops = reconcile(
            kind.descriptor(),
            &plan(kind, json!({ "enabled": true, "plugin-type": ["preoperation"] })),
            &state(
                kind,
                json!({ "enabled": false, "plugin-type": ["preoperation", "postoperation"] }),
            ),
        );
        assert_eq!(
            ops,
            vec![
                Operation::replace("enabled", vec!["true".into()]),
                Operation::delete("plugin-type", vec!["postoperation".into()]),
            ]
        );
    }

    #[test]
    fn identical_snapshots_need_no_operations() {
        let kind = PluginKind::SevenBitClean;
        let attrs = json!({
            "enabled": true,
            "plugin-type": ["preoperationadd", "preoperationmodify"],
            "attribute-type": ["uid"],
            "description": "keep ascii"
        });
        let ops = reconcile(kind.descriptor(), &plan(kind, attrs.clone()), &state(kind, attrs));
        assert!(ops.is_empty());
    }

    #[test]
    fn deferred_attribute_is_never_touched() {
        let kind = PluginKind::InternalSearchRate;
        let ops = reconcile(
            kind.descriptor(),
            &plan(
                kind,
                json!({
                    "enabled": false,
                    "base-dn": "dc=example,dc=com",
                    "filter-prefix": "(uid=user."
                }),
            ),
            &state(
                kind,
                json!({
                    "enabled": true,
                    "num-threads": 4,
                    "base-dn": "dc=example,dc=com",
                    "filter-prefix": "(uid=user."
                }),
            ),
        );
        assert_eq!(rendered(&ops), vec!["replace enabled [false]"]);
        assert!(ops.iter().all(|op| op.attribute != "num-threads"));
    }

    #[test]
    fn set_changes_are_minimal() {
        let kind = PluginKind::SevenBitClean;
        let ops = reconcile(
            kind.descriptor(),
            &plan(kind, json!({ "enabled": true, "attribute-type": ["cn", "mail", "uid"] })),
            &state(kind, json!({ "enabled": true, "attribute-type": ["uid", "sn", "mail"] })),
        );
        assert_eq!(
            rendered(&ops),
            vec!["add attribute-type [cn]", "delete attribute-type [sn]"]
        );
    }

    #[test]
    fn emptied_optional_string_is_cleared() {
        let kind = PluginKind::Delay;
        let ops = reconcile(
            kind.descriptor(),
            &plan(kind, json!({ "enabled": true, "delay": "1 s", "description": "" })),
            &state(kind, json!({ "enabled": true, "delay": "1 s", "description": "slow down" })),
        );
        assert_eq!(rendered(&ops), vec!["replace description []"]);
    }

    #[test]
    fn enum_case_does_not_cause_churn() {
        let kind = PluginKind::InternalSearchRate;
        let ops = reconcile(
            kind.descriptor(),
            &plan(
                kind,
                json!({
                    "enabled": true,
                    "base-dn": "dc=example,dc=com",
                    "filter-prefix": "(uid=",
                    "scope": "WHOLE-SUBTREE"
                }),
            ),
            &state(
                kind,
                json!({
                    "enabled": true,
                    "base-dn": "dc=example,dc=com",
                    "filter-prefix": "(uid=",
                    "scope": "whole-subtree"
                }),
            ),
        );
        assert!(ops.is_empty());
    }

    #[test]
    fn applying_operations_converges_and_is_idempotent() {
        let kind = PluginKind::PeriodicStatsLogger;
        let desired = plan(
            kind,
            json!({
                "enabled": true,
                "log-file": "logs/dsstats.csv",
                "lines-between-header": 100,
                "included-ldap-stat": ["active-operations", "work-queue"],
                "histogram-format": "count",
                "description": ""
            }),
        );
        let observed = state(
            kind,
            json!({
                "enabled": false,
                "log-file": "logs/dsstats.csv",
                "lines-between-header": 50,
                "included-ldap-stat": ["num-connections", "work-queue"],
                "description": "old",
                "suppress-if-idle": true
            }),
        );

        let ops = reconcile(kind.descriptor(), &desired, &observed);
        let converged = apply(kind.descriptor(), &observed, &ops);

        for (name, value) in desired.defined() {
            assert_eq!(converged.get(name), Some(value), "attribute {name}");
        }
        assert_eq!(
            converged.get("suppress-if-idle"),
            Some(&AttributeValue::Bool(true))
        );
        assert!(reconcile(kind.descriptor(), &desired, &converged).is_empty());
    }

    #[test]
    fn computed_attributes_are_skipped() {
        let kind = PluginKind::Custom;
        let ops = reconcile(
            kind.descriptor(),
            &plan(kind, json!({ "enabled": true })),
            &state(kind, json!({ "enabled": true, "plugin-type": ["startup"] })),
        );
        assert!(ops.is_empty());
    }
}
