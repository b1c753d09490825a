// ── Plugin variant registry ──
//
// The closed set of plugin shapes that share the `/plugins` endpoint,
// plus the conversions between wire JSON and typed snapshots. Every
// conversion is all-or-nothing.

mod catalog;
pub mod domains;

use dirplug_api::{AddPluginRequest, PluginResponse, plugin_schema};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::IntoEnumIterator;

use crate::error::SchemaError;
use crate::model::{
    AttributeDescriptor, AttributeKind, AttributeValue, Definedness, DesiredSnapshot,
    ObservedPlugin, ObservedSnapshot, PlanValue,
};
use crate::policy;

// ── PluginKind ──────────────────────────────────────────────────────

/// Discriminator for every plugin variant the registry knows.
///
/// The kebab-case name doubles as the schema URN suffix and the
/// `resourceType` label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PluginKind {
    AttributeMapper,
    ChangeSubscriptionNotification,
    ChangelogPasswordEncryption,
    CleanUpExpiredPingfederatePersistentSessions,
    CleanUpInactivePingfederatePersistentSessions,
    CoalesceModifications,
    ComposedAttribute,
    Custom,
    Delay,
    DnMapper,
    GroovyScripted,
    InternalSearchRate,
    LastAccessTime,
    LdapResultCodeTracker,
    MonitorHistory,
    PassThroughAuthentication,
    PasswordPolicyImport,
    PeriodicGc,
    PeriodicStatsLogger,
    PingOnePassThroughAuthentication,
    ProcessingTimeHistogram,
    Profiler,
    PurgeExpiredData,
    ReferentialIntegrity,
    ReferralOnUpdate,
    SearchShutdown,
    SevenBitClean,
    SimpleToExternalBind,
    SnmpSubagent,
    SubOperationTiming,
    ThirdParty,
    UniqueAttribute,
}

impl PluginKind {
    /// Canonical wire name, e.g. `"seven-bit-clean"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn descriptor(self) -> &'static VariantDescriptor {
        catalog::descriptor(self)
    }

    /// Resolve a variant by name (ASCII case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, SchemaError> {
        let trimmed = name.trim();
        Self::iter()
            .find(|k| k.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SchemaError::UnknownVariant {
                name: name.to_owned(),
            })
    }
}

// ── VariantDescriptor ───────────────────────────────────────────────

/// What removing a managed object does on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DeletionPolicy {
    /// Issue a remote DELETE.
    Delete,
    /// Edit-only variant: stop tracking locally, leave the server alone.
    Forget,
}

/// Static schema for one plugin variant.
#[derive(Debug)]
pub struct VariantDescriptor {
    pub kind: PluginKind,
    pub attributes: &'static [AttributeDescriptor],
    pub deletion: DeletionPolicy,
}

impl VariantDescriptor {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn attribute(&self, name: &str) -> Option<&'static AttributeDescriptor> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Edit-only variants can be adopted and modified but never created or deleted.
    pub fn is_edit_only(&self) -> bool {
        self.deletion == DeletionPolicy::Forget
    }
}

/// Every registered variant, in declaration order.
pub fn variants() -> impl Iterator<Item = &'static VariantDescriptor> {
    PluginKind::iter().map(PluginKind::descriptor)
}

// ── Decode ──────────────────────────────────────────────────────────

/// Resolve a wire response to exactly one variant and decode its state.
///
/// Every plugin schema counts as a slot, registered or not. Zero or
/// several distinct slots in one response is a contract violation and
/// fails the whole decode; a schema repeated verbatim is one slot.
pub fn decode(response: &PluginResponse) -> Result<ObservedPlugin, SchemaError> {
    let mut slots: Vec<&str> = Vec::new();
    for name in response.plugin_variants() {
        if !slots.contains(&name) {
            slots.push(name);
        }
    }

    let kind = match slots.as_mut_slice() {
        [name] => PluginKind::from_name(*name)?,
        [] => {
            return Err(SchemaError::NoVariant {
                id: response.id.clone(),
            });
        }
        many => {
            // Registered variants in declaration order, then the rest as sent.
            many.sort_by_key(|name| {
                PluginKind::iter()
                    .position(|k| k.name() == *name)
                    .unwrap_or(usize::MAX)
            });
            return Err(SchemaError::MultipleVariants {
                id: response.id.clone(),
                variants: many.iter().map(|name| (*name).to_owned()).collect(),
            });
        }
    };

    let attributes = response
        .attribute_values()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect::<Map<String, Value>>();

    Ok(ObservedPlugin {
        id: response.id.clone(),
        kind,
        attributes: observed_from_attributes(kind, &attributes)?,
    })
}

/// Build a fully populated observed snapshot from raw attribute JSON.
///
/// Attributes the variant does not model are ignored; missing ones are
/// recorded as "no value".
pub fn observed_from_attributes(
    kind: PluginKind,
    attributes: &Map<String, Value>,
) -> Result<ObservedSnapshot, SchemaError> {
    let mut values = IndexMap::with_capacity(kind.descriptor().attributes.len());
    for attr in kind.descriptor().attributes {
        let value = match attributes.get(attr.name) {
            None | Some(Value::Null) => policy::empty_for(attr.kind),
            Some(raw) => policy::normalize(attr.kind, &parse_value(attr, raw)?),
        };
        values.insert(attr.name.to_owned(), value);
    }
    Ok(ObservedSnapshot { values })
}

// ── Input ───────────────────────────────────────────────────────────

/// Build a desired snapshot from caller input keyed by wire attribute name.
///
/// Omitted or `null` attributes are deferred to the server.
pub fn desired_from_input(
    kind: PluginKind,
    input: &Map<String, Value>,
) -> Result<DesiredSnapshot, SchemaError> {
    let variant = kind.descriptor();

    for (key, value) in input {
        match variant.attribute(key) {
            None => {
                return Err(SchemaError::UnknownAttribute {
                    variant: variant.name().to_owned(),
                    attribute: key.clone(),
                });
            }
            Some(attr) if attr.is_computed() && !value.is_null() => {
                return Err(SchemaError::ComputedAttribute {
                    variant: variant.name().to_owned(),
                    attribute: key.clone(),
                });
            }
            Some(_) => {}
        }
    }

    let mut values = IndexMap::with_capacity(variant.attributes.len());
    for attr in variant.attributes {
        let planned = match input.get(attr.name) {
            Some(raw) if !raw.is_null() && !attr.is_computed() => {
                PlanValue::Known(policy::normalize(attr.kind, &parse_value(attr, raw)?))
            }
            _ => PlanValue::Unknown,
        };
        let missing = match &planned {
            PlanValue::Unknown => true,
            PlanValue::Known(v) => v.is_absent() || v.as_set().is_some_and(|s| s.is_empty()),
        };
        if missing && attr.definedness == Definedness::Required {
            return Err(SchemaError::MissingRequired {
                variant: variant.name().to_owned(),
                attribute: attr.name.to_owned(),
            });
        }
        values.insert(attr.name, planned);
    }
    Ok(DesiredSnapshot { values })
}

// ── Encode ──────────────────────────────────────────────────────────

/// Build the `POST /plugins` body for a new plugin.
///
/// Only attributes with a concrete, non-empty value are sent.
pub fn encode_add(id: &str, kind: PluginKind, desired: &DesiredSnapshot) -> AddPluginRequest {
    let attributes = desired
        .defined()
        .filter(|(_, v)| !v.is_absent() && !v.as_set().is_some_and(|s| s.is_empty()))
        .map(|(name, v)| (name.to_owned(), v.to_json()))
        .collect();

    AddPluginRequest {
        plugin_name: id.to_owned(),
        schemas: vec![plugin_schema(kind.name())],
        attributes,
    }
}

// ── Value parsing ───────────────────────────────────────────────────

fn json_type(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => format!("bool {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string \"{s}\""),
        Value::Array(_) => "array".into(),
        Value::Object(_) => "object".into(),
    }
}

fn mismatch(attr: &AttributeDescriptor, raw: &Value) -> SchemaError {
    SchemaError::TypeMismatch {
        attribute: attr.name.to_owned(),
        expected: attr.kind.label(),
        found: json_type(raw),
    }
}

fn canonical(attr: &AttributeDescriptor, raw: &str) -> Result<String, SchemaError> {
    match attr.kind.domain() {
        None => Ok(raw.to_owned()),
        Some(domain) => domain
            .canonicalize(raw)
            .map(str::to_owned)
            .ok_or_else(|| SchemaError::UnknownEnumValue {
                attribute: attr.name.to_owned(),
                value: raw.to_owned(),
                allowed: domain.allowed(),
            }),
    }
}

/// Type-check one JSON value against its descriptor.
///
/// Accepts the spellings both the server and hand-written manifests use:
/// stringified bools and ints, and a bare string for a one-element set.
fn parse_value(attr: &AttributeDescriptor, raw: &Value) -> Result<AttributeValue, SchemaError> {
    match attr.kind {
        AttributeKind::Bool => match raw {
            Value::Bool(b) => Ok(AttributeValue::Bool(*b)),
            Value::String(s) => s
                .trim()
                .to_ascii_lowercase()
                .parse()
                .map(AttributeValue::Bool)
                .map_err(|_| mismatch(attr, raw)),
            _ => Err(mismatch(attr, raw)),
        },
        AttributeKind::Int => match raw {
            Value::Number(n) => n
                .as_i64()
                .map(AttributeValue::Int)
                .ok_or_else(|| mismatch(attr, raw)),
            Value::String(s) => s
                .trim()
                .parse()
                .map(AttributeValue::Int)
                .map_err(|_| mismatch(attr, raw)),
            _ => Err(mismatch(attr, raw)),
        },
        AttributeKind::String | AttributeKind::Enum(_) => match raw {
            Value::String(s) if s.is_empty() => Ok(AttributeValue::Absent),
            Value::String(s) => canonical(attr, s).map(AttributeValue::String),
            _ => Err(mismatch(attr, raw)),
        },
        AttributeKind::StringSet | AttributeKind::EnumSet(_) => {
            let items: Vec<&str> = match raw {
                Value::String(s) => vec![s.as_str()],
                Value::Array(items) => items
                    .iter()
                    .map(|item| item.as_str().ok_or_else(|| mismatch(attr, item)))
                    .collect::<Result<_, _>>()?,
                _ => return Err(mismatch(attr, raw)),
            };
            let set = items
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(|s| canonical(attr, s))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(AttributeValue::set(set))
        }
    }
}
