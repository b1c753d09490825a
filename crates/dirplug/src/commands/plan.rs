//! `plan`: compare a manifest against the server.

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::Tabled;

use dirplug_core::{DesiredPlugin, PlannedChange, PluginController, PluginKind};

use crate::cli::{GlobalOpts, ManifestArgs, OutputFormat};
use crate::error::CliError;
use crate::state::StateFile;
use crate::{config, manifest, output};

/// One line of a plan: what will happen to one plugin.
#[derive(Debug, Clone, Serialize)]
pub struct PlanEntry {
    pub id: String,
    pub variant: PluginKind,
    #[serde(flatten)]
    pub change: PlannedChange,
}

impl PlanEntry {
    /// Copy with sensitive operation values masked, for display.
    fn masked(&self) -> Self {
        let mask = |ops: &[dirplug_core::Operation]| {
            ops.iter()
                .map(|op| output::mask_operation(self.variant, op))
                .collect()
        };
        let change = match &self.change {
            PlannedChange::Adopt { ops } => PlannedChange::Adopt { ops: mask(ops) },
            PlannedChange::Update { ops } => PlannedChange::Update { ops: mask(ops) },
            other => other.clone(),
        };
        Self {
            id: self.id.clone(),
            variant: self.variant,
            change,
        }
    }
}

#[derive(Tabled)]
struct PlanRow {
    #[tabled(rename = "")]
    marker: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "VARIANT")]
    variant: String,
    #[tabled(rename = "ACTION")]
    action: String,
    #[tabled(rename = "OPERATIONS")]
    operations: String,
}

impl From<&PlanEntry> for PlanRow {
    fn from(e: &PlanEntry) -> Self {
        Self {
            marker: output::change_marker(&e.change, false),
            id: e.id.clone(),
            variant: e.variant.to_string(),
            action: e.change.label().into(),
            operations: e
                .change
                .operations()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Plan every declared plugin, then every tracked plugin the manifest dropped.
pub async fn build(
    controller: &PluginController,
    desired: &[DesiredPlugin],
    state: &StateFile,
) -> Result<Vec<PlanEntry>, CliError> {
    let mut entries = Vec::with_capacity(desired.len());
    for plugin in desired {
        let change = controller.plan(plugin, state.get(&plugin.id)).await?;
        tracing::debug!(id = %plugin.id, action = change.label(), "planned");
        entries.push(PlanEntry {
            id: plugin.id.clone(),
            variant: plugin.kind,
            change,
        });
    }
    for tracked in state.iter() {
        if desired.iter().all(|d| d.id != tracked.id) {
            entries.push(PlanEntry {
                id: tracked.id.clone(),
                variant: tracked.kind,
                change: PluginController::plan_removal(tracked.kind),
            });
        }
    }
    Ok(entries)
}

/// "Plan: 1 to create, 2 to update, ..." with zero counts omitted.
pub fn summary(entries: &[PlanEntry], color: bool) -> String {
    let count = |label: &str| entries.iter().filter(|e| e.change.label() == label).count();
    let parts: Vec<String> = [
        ("create", "to create"),
        ("adopt", "to adopt"),
        ("update", "to update"),
        ("delete", "to delete"),
        ("forget", "to forget"),
    ]
    .into_iter()
    .filter_map(|(label, text)| {
        let n = count(label);
        (n > 0).then(|| format!("{n} {text}"))
    })
    .collect();

    let mut out = String::new();
    if parts.is_empty() {
        let _ = write!(out, "No changes. {} plugin(s) up to date.", entries.len());
        return if color { out.green().to_string() } else { out };
    }
    let _ = write!(out, "Plan: {}.", parts.join(", "));
    if color { out.bold().to_string() } else { out }
}

pub async fn handle(
    controller: &PluginController,
    args: &ManifestArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let desired = manifest::load(&args.file)?;
    let state = StateFile::load(&config::state_path(global))?;
    let entries = build(controller, &desired, &state).await?;

    let masked: Vec<PlanEntry> = entries.iter().map(PlanEntry::masked).collect();
    let out = output::render_list(&global.output, &masked, |e| PlanRow::from(e), |e| {
        format!("{}\t{}", e.change.label(), e.id)
    });
    output::print_output(&out, global.quiet);

    if matches!(global.output, OutputFormat::Table) {
        output::print_output(
            &summary(&entries, output::should_color(&global.color)),
            global.quiet,
        );
    }
    Ok(())
}
