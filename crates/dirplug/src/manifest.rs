//! Manifest files: the declared set of plugins.
//!
//! A manifest is TOML, YAML, or JSON holding a `plugins` list. Each entry
//! names the plugin (`id`), its variant (`type`), and any attributes in
//! their wire spelling:
//!
//! ```toml
//! [[plugins]]
//! id = "7-Bit Clean"
//! type = "seven-bit-clean"
//! enabled = true
//! attribute-type = ["uid", "mail"]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use dirplug_core::registry::desired_from_input;
use dirplug_core::{DesiredPlugin, PluginKind, SchemaError};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Yaml,
    Json,
}

impl ManifestFormat {
    fn from_path(path: &Path) -> Result<Self, CliError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(CliError::Validation {
                field: "file".into(),
                reason: format!(
                    "{}: expected a .toml, .yaml, .yml, or .json manifest",
                    path.display()
                ),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    plugins: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

/// Read and validate a manifest file.
pub fn load(path: &Path) -> Result<Vec<DesiredPlugin>, CliError> {
    let format = ManifestFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    parse(&contents, format, &path.display().to_string())
}

/// Parse manifest text. `origin` names the source in error messages.
pub fn parse(
    contents: &str,
    format: ManifestFormat,
    origin: &str,
) -> Result<Vec<DesiredPlugin>, CliError> {
    let syntax = |reason: String| CliError::Validation {
        field: "manifest".into(),
        reason: format!("{origin}: {reason}"),
    };
    let document: Document = match format {
        ManifestFormat::Toml => toml::from_str(contents).map_err(|e| syntax(e.to_string()))?,
        ManifestFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|e| syntax(e.to_string()))?
        }
        ManifestFormat::Json => {
            serde_json::from_str(contents).map_err(|e| syntax(e.to_string()))?
        }
    };

    let mut seen = HashSet::new();
    let mut plugins = Vec::with_capacity(document.plugins.len());
    for entry in document.plugins {
        if entry.id.trim().is_empty() {
            return Err(syntax("plugin entry with an empty id".into()));
        }
        if !seen.insert(entry.id.clone()) {
            return Err(syntax(format!("plugin '{}' is declared twice", entry.id)));
        }
        let invalid = |source: SchemaError| CliError::Manifest {
            path: origin.to_owned(),
            id: entry.id.clone(),
            source,
        };
        let kind = PluginKind::from_name(&entry.kind).map_err(invalid)?;
        let attributes = desired_from_input(kind, &entry.attributes).map_err(invalid)?;
        plugins.push(DesiredPlugin {
            id: entry.id,
            kind,
            attributes,
        });
    }
    Ok(plugins)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use dirplug_core::{AttributeValue, PlanValue};
    use pretty_assertions::assert_eq;

    const TOML_MANIFEST: &str = r#"
[[plugins]]
id = "7-Bit Clean"
type = "Seven-Bit-Clean"
enabled = true
attribute-type = ["uid", "mail"]

[[plugins]]
id = "slow-binds"
type = "delay"
enabled = false
delay = "250 ms"
"#;

    #[test]
    fn parses_toml_entries_in_order() {
        let plugins = parse(TOML_MANIFEST, ManifestFormat::Toml, "test.toml").unwrap();
        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins[0].id, "7-Bit Clean");
        assert_eq!(plugins[0].kind, PluginKind::SevenBitClean);
        assert_eq!(
            plugins[0].attributes.get("attribute-type"),
            Some(&PlanValue::Known(AttributeValue::set(["mail", "uid"])))
        );
        assert_eq!(plugins[1].kind, PluginKind::Delay);
        // Omitted attributes are deferred to the server.
        assert_eq!(
            plugins[1].attributes.get("description"),
            Some(&PlanValue::Unknown)
        );
    }

    #[test]
    fn parses_yaml_and_json() {
        let yaml = "plugins:\n  - id: slow-binds\n    type: delay\n    enabled: true\n    delay: 1 s\n";
        let from_yaml = parse(yaml, ManifestFormat::Yaml, "m.yaml").unwrap();
        let json = r#"{"plugins":[{"id":"slow-binds","type":"delay","enabled":true,"delay":"1 s"}]}"#;
        let from_json = parse(json, ManifestFormat::Json, "m.json").unwrap();
        assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn unknown_attribute_names_the_entry() {
        let json = r#"{"plugins":[{"id":"x","type":"delay","enabled":true,"delay":"1 s","colour":"red"}]}"#;
        let err = parse(json, ManifestFormat::Json, "m.json").unwrap_err();
        match err {
            CliError::Manifest { id, source, .. } => {
                assert_eq!(id, "x");
                assert!(matches!(source, SchemaError::UnknownAttribute { .. }));
            }
            other => panic!("expected Manifest error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        let json = r#"{"plugins":[{"id":"x","type":"teleporter","enabled":true}]}"#;
        let err = parse(json, ManifestFormat::Json, "m.json").unwrap_err();
        assert!(matches!(
            err,
            CliError::Manifest {
                source: SchemaError::UnknownVariant { .. },
                ..
            }
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{"plugins":[
            {"id":"x","type":"delay","enabled":true,"delay":"1 s"},
            {"id":"x","type":"delay","enabled":true,"delay":"2 s"}
        ]}"#;
        let err = parse(json, ManifestFormat::Json, "m.json").unwrap_err();
        assert!(err.to_string().contains("declared twice"), "{err}");
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ManifestFormat::from_path(Path::new("a.YML")).unwrap(),
            ManifestFormat::Yaml
        );
        assert!(ManifestFormat::from_path(Path::new("a.ini")).is_err());
    }
}
