//! `list`: every plugin on the server.

use serde::Serialize;
use tabled::Tabled;

use dirplug_core::{AttributeValue, LifecycleState, PluginController, PluginKind};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::state::StateFile;
use crate::{config, output};

#[derive(Debug, Serialize)]
struct PluginSummary {
    id: String,
    variant: PluginKind,
    enabled: Option<bool>,
    /// Local tracking state; `None` when not managed here.
    tracking: Option<LifecycleState>,
}

#[derive(Tabled)]
struct PluginRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "VARIANT")]
    variant: String,
    #[tabled(rename = "ENABLED")]
    enabled: String,
    #[tabled(rename = "TRACKING")]
    tracking: String,
}

impl From<&PluginSummary> for PluginRow {
    fn from(p: &PluginSummary) -> Self {
        Self {
            id: p.id.clone(),
            variant: p.variant.to_string(),
            enabled: p.enabled.map_or_else(|| "-".into(), |b| b.to_string()),
            tracking: p.tracking.map_or_else(|| "-".into(), |s| s.to_string()),
        }
    }
}

pub async fn handle(controller: &PluginController, global: &GlobalOpts) -> Result<(), CliError> {
    let state = StateFile::load(&config::state_path(global))?;
    let plugins = controller.list().await?;

    let summaries: Vec<PluginSummary> = plugins
        .iter()
        .map(|p| PluginSummary {
            id: p.id.clone(),
            variant: p.kind,
            enabled: match p.attributes.get("enabled") {
                Some(AttributeValue::Bool(b)) => Some(*b),
                _ => None,
            },
            tracking: state.get(&p.id).map(|t| t.state),
        })
        .collect();

    let out = output::render_list(&global.output, &summaries, |p| PluginRow::from(p), |p| {
        p.id.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
