// ── Managed object lifecycle ──
//
// Local tracking for plugins under management. An object starts
// Unmanaged on the server, becomes Adopted on its first reconciliation,
// Managed afterwards, and ends Deleted or back to Unmanaged (edit-only
// variants are forgotten, never deleted).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ObservedSnapshot;
use crate::operation::Operation;
use crate::registry::{DeletionPolicy, PluginKind};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LifecycleState {
    /// Exists remotely, not under local control.
    #[default]
    Unmanaged,
    /// First reconciliation against a pre-existing object has run.
    Adopted,
    /// Created here, or reconciled again after adoption.
    Managed,
    /// Removed from the server.
    Deleted,
}

impl LifecycleState {
    /// The state after a successful update or adoption.
    pub fn after_update(self) -> Self {
        match self {
            Self::Unmanaged => Self::Adopted,
            Self::Adopted | Self::Managed => Self::Managed,
            Self::Deleted => Self::Deleted,
        }
    }

    /// The state after removal under the variant's deletion policy.
    pub fn after_removal(policy: DeletionPolicy) -> Self {
        match policy {
            DeletionPolicy::Delete => Self::Deleted,
            DeletionPolicy::Forget => Self::Unmanaged,
        }
    }

    pub fn is_tracked(self) -> bool {
        matches!(self, Self::Adopted | Self::Managed)
    }
}

/// One locally tracked plugin and the last state read back for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedObject {
    pub id: String,
    pub kind: PluginKind,
    pub state: LifecycleState,
    pub observed: ObservedSnapshot,
    pub last_applied: DateTime<Utc>,
}

impl ManagedObject {
    pub fn new(id: String, kind: PluginKind, state: LifecycleState, observed: ObservedSnapshot) -> Self {
        Self {
            id,
            kind,
            state,
            observed,
            last_applied: Utc::now(),
        }
    }
}

/// What applying a desired plugin will do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum PlannedChange {
    /// Absent remotely; will be added.
    Create,
    /// Exists remotely but untracked; take over and converge it.
    Adopt { ops: Vec<Operation> },
    /// Tracked and drifted.
    Update { ops: Vec<Operation> },
    NoChange,
    /// Tracked but no longer declared; will be removed remotely.
    Delete,
    /// Tracked edit-only object no longer declared; tracking is dropped.
    Forget,
}

impl PlannedChange {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Adopt { .. } => "adopt",
            Self::Update { .. } => "update",
            Self::NoChange => "no-change",
            Self::Delete => "delete",
            Self::Forget => "forget",
        }
    }

    pub fn operations(&self) -> &[Operation] {
        match self {
            Self::Adopt { ops } | Self::Update { ops } => ops,
            _ => &[],
        }
    }

    /// Whether executing this change touches the server.
    pub fn is_remote(&self) -> bool {
        match self {
            Self::Create | Self::Delete => true,
            Self::Adopt { ops } | Self::Update { ops } => !ops.is_empty(),
            Self::NoChange | Self::Forget => false,
        }
    }
}

/// Outcome of a removal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Deleted,
    /// The server had already lost the object.
    AlreadyGone,
    Forgotten,
}
