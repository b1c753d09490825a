//! Declarative management of directory server plugins.
//!
//! This crate owns the domain logic between `dirplug-api` and the CLI:
//!
//! - **Value model** ([`model`]): typed attribute values, per-attribute
//!   descriptors, and the desired ([`DesiredSnapshot`]) and observed
//!   ([`ObservedSnapshot`]) snapshots that get compared.
//!
//! - **Reconciliation** ([`reconcile()`]): a pure diff from (plan, state) to
//!   an ordered list of LDAP-style modify [`Operation`]s. Scalars are
//!   replaced; sets only ever gain or lose individual members.
//!
//! - **Registry** ([`registry`]): the closed set of plugin variants behind
//!   the `/plugins` endpoint, each with a static attribute table, and the
//!   all-or-nothing decode from wire JSON to exactly one variant.
//!
//! - **[`PluginController`]**: create / read / update / delete against a
//!   live server, built from an explicit [`ControllerConfig`].

pub mod config;
pub mod controller;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod operation;
pub mod policy;
pub mod reconcile;
pub mod registry;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{AuthCredentials, ControllerConfig, TlsVerification};
pub use controller::{Applied, PluginController};
pub use error::{CoreError, SchemaError};
pub use lifecycle::{LifecycleState, ManagedObject, PlannedChange, Removal};
pub use model::{
    AttributeDescriptor, AttributeKind, AttributeValue, Definedness, DesiredPlugin,
    DesiredSnapshot, EnumDomain, ObservedPlugin, ObservedSnapshot, PlanValue,
};
pub use operation::{Operation, OperationKind};
pub use reconcile::{apply, reconcile};
pub use registry::{DeletionPolicy, PluginKind, VariantDescriptor};
