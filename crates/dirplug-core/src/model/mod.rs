// ── Domain model ──
//
// Value types, per-attribute descriptors, and the two snapshot shapes
// the reconciliation engine compares.

pub mod descriptor;
pub mod snapshot;
pub mod value;

pub use descriptor::{AttributeDescriptor, Definedness};
pub use snapshot::{DesiredPlugin, DesiredSnapshot, ObservedPlugin, ObservedSnapshot};
pub use value::{AttributeKind, AttributeValue, EnumDomain, PlanValue};
