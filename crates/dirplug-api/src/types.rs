// Wire types for the configuration API's plugin endpoints.
//
// Responses are SCIM-shaped: a `schemas` array naming the concrete
// configuration type, an `id`, and the attributes in kebab-case. The
// attributes stay as raw JSON here; `dirplug-core` owns their typing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// URN prefix shared by every plugin schema. The variant name follows it.
pub const PLUGIN_SCHEMA_PREFIX: &str = "urn:pingidentity:schemas:configuration:2.0:plugin:";

/// Build the schema URN for a plugin variant name (e.g. `"delay"`).
pub fn plugin_schema(variant: &str) -> String {
    format!("{PLUGIN_SCHEMA_PREFIX}{variant}")
}

// ── Responses ───────────────────────────────────────────────────────

/// One plugin configuration object as returned by `GET /plugins/{id}`.
///
/// Each plugin URN in `schemas` is a discriminator slot. The protocol
/// promises exactly one; `dirplug-core` enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginResponse {
    #[serde(default)]
    pub schemas: Vec<String>,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    /// Everything else: attribute values plus any `urn:` message blocks.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl PluginResponse {
    /// Variant names of every plugin schema URN in `schemas`, in order.
    ///
    /// Non-plugin URNs (message or extension schemas) are skipped.
    pub fn plugin_variants(&self) -> impl Iterator<Item = &str> {
        self.schemas
            .iter()
            .filter_map(|s| s.strip_prefix(PLUGIN_SCHEMA_PREFIX))
    }

    /// Attribute entries, without the `urn:`-keyed message blocks.
    pub fn attribute_values(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.attributes.iter().filter(|(k, _)| !k.starts_with("urn:"))
    }
}

/// `GET /plugins` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<u64>,
    #[serde(rename = "Resources", default)]
    pub resources: Vec<PluginResponse>,
}

/// SCIM error body returned with non-2xx statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
}

// ── Requests ────────────────────────────────────────────────────────

/// `POST /plugins` body for creating a new plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPluginRequest {
    #[serde(rename = "pluginName")]
    pub plugin_name: String,
    pub schemas: Vec<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// LDAP modify operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifyKind {
    Replace,
    Add,
    Delete,
}

/// One entry of an update request: `{op, path, values}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyOperation {
    pub op: ModifyKind,
    pub path: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// `PATCH /plugins/{id}` body. Shared by every variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub operations: Vec<ModifyOperation>,
}
