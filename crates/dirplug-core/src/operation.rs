// ── Modify operations ──
//
// One instruction in the LDAP modify vocabulary the configuration API
// accepts. Values are already rendered to their wire strings.

use std::fmt;

use dirplug_api::{ModifyKind, ModifyOperation, UpdateRequest};
use serde::{Deserialize, Serialize};

/// `replace` for scalars; `add`/`delete` for individual set members.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OperationKind {
    Replace,
    Add,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub kind: OperationKind,
    pub attribute: String,
    pub values: Vec<String>,
}

impl Operation {
    pub fn replace(attribute: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            kind: OperationKind::Replace,
            attribute: attribute.into(),
            values,
        }
    }

    pub fn add(attribute: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            kind: OperationKind::Add,
            attribute: attribute.into(),
            values,
        }
    }

    pub fn delete(attribute: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            kind: OperationKind::Delete,
            attribute: attribute.into(),
            values,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.kind, self.attribute, self.values.join(", "))
    }
}

// ── Wire conversion ─────────────────────────────────────────────────

impl From<OperationKind> for ModifyKind {
    fn from(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Replace => Self::Replace,
            OperationKind::Add => Self::Add,
            OperationKind::Delete => Self::Delete,
        }
    }
}

impl From<&Operation> for ModifyOperation {
    fn from(op: &Operation) -> Self {
        Self {
            op: op.kind.into(),
            path: op.attribute.clone(),
            values: op.values.clone(),
        }
    }
}

/// Build the shared `PATCH` body from an operation list.
pub fn update_request(ops: &[Operation]) -> UpdateRequest {
    UpdateRequest {
        operations: ops.iter().map(ModifyOperation::from).collect(),
    }
}
