//! `show`: one plugin as the server reports it.

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::{Map, Value};

use dirplug_core::{ObservedPlugin, PluginController, PluginKind};

use crate::cli::{GlobalOpts, ShowArgs};
use crate::error::CliError;
use crate::output;

/// Display form of a decoded plugin with sensitive values masked.
#[derive(Debug, Serialize)]
struct PluginView {
    id: String,
    variant: PluginKind,
    attributes: Map<String, Value>,
}

impl From<&ObservedPlugin> for PluginView {
    fn from(plugin: &ObservedPlugin) -> Self {
        let attributes = plugin
            .attributes
            .iter()
            .map(|(name, value)| {
                let sensitive = plugin
                    .kind
                    .descriptor()
                    .attribute(name)
                    .is_some_and(|a| a.sensitive);
                let json = if sensitive && !value.is_absent() {
                    Value::String(output::MASK.into())
                } else {
                    value.to_json()
                };
                (name.to_owned(), json)
            })
            .collect();
        Self {
            id: plugin.id.clone(),
            variant: plugin.kind,
            attributes,
        }
    }
}

fn detail(plugin: &ObservedPlugin) -> String {
    let width = plugin
        .attributes
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  {}", "id", plugin.id);
    let _ = writeln!(out, "{:<width$}  {}", "variant", plugin.kind);
    let _ = writeln!(out);
    for (name, value) in plugin.attributes.iter() {
        let _ = writeln!(
            out,
            "{name:<width$}  {}",
            output::display_value(plugin.kind, name, value)
        );
    }
    out.trim_end().to_owned()
}

pub async fn handle(
    controller: &PluginController,
    args: &ShowArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let plugin = controller
        .read(&args.id)
        .await?
        .ok_or_else(|| CliError::NotFound {
            resource_type: "plugin".into(),
            identifier: args.id.clone(),
            list_command: "list".into(),
        })?;

    let out = output::render_single(
        &global.output,
        &PluginView::from(&plugin),
        |_| detail(&plugin),
        |v| v.id.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
