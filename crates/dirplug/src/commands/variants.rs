//! `variants`: describe the plugin registry.

use std::fmt::Write as _;

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use dirplug_core::registry;
use dirplug_core::{
    AttributeDescriptor, Definedness, DeletionPolicy, PluginKind, VariantDescriptor,
};

use crate::cli::{GlobalOpts, VariantsArgs};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct AttributeView {
    name: &'static str,
    kind: &'static str,
    definedness: Definedness,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    sensitive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<&'static [&'static str]>,
}

impl From<&AttributeDescriptor> for AttributeView {
    fn from(a: &AttributeDescriptor) -> Self {
        Self {
            name: a.name,
            kind: a.kind.label(),
            definedness: a.definedness,
            sensitive: a.sensitive,
            values: a.kind.domain().map(|d| d.values),
        }
    }
}

#[derive(Debug, Serialize)]
struct VariantView {
    name: &'static str,
    deletion: DeletionPolicy,
    attributes: Vec<AttributeView>,
}

impl From<&VariantDescriptor> for VariantView {
    fn from(v: &VariantDescriptor) -> Self {
        Self {
            name: v.name(),
            deletion: v.deletion,
            attributes: v.attributes.iter().map(AttributeView::from).collect(),
        }
    }
}

#[derive(Tabled)]
struct VariantRow {
    #[tabled(rename = "VARIANT")]
    name: String,
    #[tabled(rename = "ATTRIBUTES")]
    attributes: usize,
    #[tabled(rename = "REQUIRED")]
    required: String,
    #[tabled(rename = "LIFECYCLE")]
    lifecycle: &'static str,
}

impl From<&VariantView> for VariantRow {
    fn from(v: &VariantView) -> Self {
        Self {
            name: v.name.into(),
            attributes: v.attributes.len(),
            required: v
                .attributes
                .iter()
                .filter(|a| a.definedness == Definedness::Required)
                .map(|a| a.name)
                .collect::<Vec<_>>()
                .join(", "),
            lifecycle: match v.deletion {
                DeletionPolicy::Delete => "create/delete",
                DeletionPolicy::Forget => "edit-only",
            },
        }
    }
}

#[derive(Tabled)]
struct AttributeRow {
    #[tabled(rename = "ATTRIBUTE")]
    name: &'static str,
    #[tabled(rename = "TYPE")]
    kind: &'static str,
    #[tabled(rename = "DEFINEDNESS")]
    definedness: String,
    #[tabled(rename = "VALUES")]
    values: String,
}

fn detail(view: &VariantView) -> String {
    let rows: Vec<AttributeRow> = view
        .attributes
        .iter()
        .map(|a| AttributeRow {
            name: a.name,
            kind: a.kind,
            definedness: if a.sensitive {
                format!("{} (sensitive)", a.definedness)
            } else {
                a.definedness.to_string()
            },
            values: a.values.map(|v| v.join(", ")).unwrap_or_default(),
        })
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "variant   {}", view.name);
    let _ = writeln!(
        out,
        "lifecycle {}",
        match view.deletion {
            DeletionPolicy::Delete => "create, update, delete",
            DeletionPolicy::Forget => "edit-only (adopted and updated; forgotten on removal)",
        }
    );
    let _ = writeln!(out);
    out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    out
}

pub fn handle(args: &VariantsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let out = match args.name {
        Some(ref name) => {
            let kind = PluginKind::from_name(name).map_err(|_| CliError::NotFound {
                resource_type: "variant".into(),
                identifier: name.clone(),
                list_command: "variants".into(),
            })?;
            let view = VariantView::from(kind.descriptor());
            output::render_single(&global.output, &view, detail, |v| {
                v.attributes
                    .iter()
                    .map(|a| a.name)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        None => {
            let views: Vec<VariantView> = registry::variants().map(VariantView::from).collect();
            output::render_list(&global.output, &views, |v| VariantRow::from(v), |v| {
                v.name.to_owned()
            })
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn required_attributes_are_listed() {
        let view = VariantView::from(PluginKind::Delay.descriptor());
        let row = VariantRow::from(&view);
        assert_eq!(row.name, "delay");
        assert!(row.required.contains("delay"), "{}", row.required);
        assert_eq!(row.lifecycle, "create/delete");
    }

    #[test]
    fn edit_only_variant_detail() {
        let view = VariantView::from(PluginKind::Custom.descriptor());
        let text = detail(&view);
        assert!(text.contains("edit-only"), "{text}");
        assert!(text.contains("plugin-type"), "{text}");
    }

    #[test]
    fn enum_domains_are_exposed() {
        let view = VariantView::from(PluginKind::InternalSearchRate.descriptor());
        let scope = view.attributes.iter().find(|a| a.name == "scope").unwrap();
        assert!(scope.values.is_some_and(|v| v.contains(&"whole-subtree")));
    }
}
