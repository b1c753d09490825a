//! `apply`: converge the server to a manifest.
//!
//! Every change is planned up front, so a manifest that cannot be applied
//! fails before the first write. The state file is saved after each step.

use serde::Serialize;
use tabled::Tabled;

use dirplug_core::{
    Applied, DesiredPlugin, LifecycleState, ManagedObject, Operation, PlannedChange,
    PluginController, PluginKind, Removal,
};

use crate::cli::{GlobalOpts, ManifestArgs};
use crate::commands::plan::{self, PlanEntry};
use crate::commands::util;
use crate::error::CliError;
use crate::state::StateFile;
use crate::{config, manifest, output};

/// What actually happened to one plugin.
#[derive(Debug, Serialize)]
struct Outcome {
    id: String,
    variant: PluginKind,
    result: &'static str,
    operations: Vec<Operation>,
}

#[derive(Tabled)]
struct OutcomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "VARIANT")]
    variant: String,
    #[tabled(rename = "RESULT")]
    result: String,
    #[tabled(rename = "OPERATIONS")]
    operations: String,
}

impl From<&Outcome> for OutcomeRow {
    fn from(o: &Outcome) -> Self {
        Self {
            id: o.id.clone(),
            variant: o.variant.to_string(),
            result: o.result.into(),
            operations: o
                .operations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn applied_result(planned: Option<&PlannedChange>, applied: &Applied) -> &'static str {
    if applied.state == LifecycleState::Adopted {
        "adopted"
    } else if matches!(planned, Some(PlannedChange::Create)) {
        "created"
    } else if applied.ops.is_empty() {
        "unchanged"
    } else {
        "updated"
    }
}

fn removal_result(removal: Removal) -> &'static str {
    match removal {
        Removal::Deleted => "deleted",
        Removal::AlreadyGone => "already-gone",
        Removal::Forgotten => "forgotten",
    }
}

async fn execute(
    controller: &PluginController,
    desired: &[DesiredPlugin],
    entries: &[PlanEntry],
    state: &mut StateFile,
    spinner: &indicatif::ProgressBar,
) -> Result<Vec<Outcome>, CliError> {
    let mut outcomes = Vec::with_capacity(entries.len());

    for plugin in desired {
        spinner.set_message(format!("applying {}", plugin.id));
        let planned = entries.iter().find(|e| e.id == plugin.id).map(|e| &e.change);
        let applied = controller.apply(plugin, state.get(&plugin.id)).await?;

        state.record(ManagedObject::new(
            plugin.id.clone(),
            plugin.kind,
            applied.state,
            applied.plugin.attributes.clone(),
        ));
        state.save()?;

        outcomes.push(Outcome {
            id: plugin.id.clone(),
            variant: plugin.kind,
            result: applied_result(planned, &applied),
            operations: applied
                .ops
                .iter()
                .map(|op| output::mask_operation(plugin.kind, op))
                .collect(),
        });
    }

    for entry in entries {
        if !matches!(entry.change, PlannedChange::Delete | PlannedChange::Forget) {
            continue;
        }
        spinner.set_message(format!("removing {}", entry.id));
        let removal = controller.remove(entry.variant, &entry.id).await?;
        state.remove(&entry.id);
        state.save()?;

        outcomes.push(Outcome {
            id: entry.id.clone(),
            variant: entry.variant,
            result: removal_result(removal),
            operations: Vec::new(),
        });
    }

    Ok(outcomes)
}

pub async fn handle(
    controller: &PluginController,
    args: &ManifestArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let desired = manifest::load(&args.file)?;
    let mut state = StateFile::load(&config::state_path(global))?;
    let entries = plan::build(controller, &desired, &state).await?;

    let deletes: Vec<&str> = entries
        .iter()
        .filter(|e| e.change == PlannedChange::Delete)
        .map(|e| e.id.as_str())
        .collect();
    if !deletes.is_empty() {
        let prompt = format!(
            "Delete {} plugin(s) from the server ({})?",
            deletes.len(),
            deletes.join(", ")
        );
        if !util::confirm(&prompt, "delete plugins", global.yes)? {
            eprintln!("Aborted. Nothing was changed.");
            return Ok(());
        }
    }

    let spinner = util::spinner(global.quiet);
    let result = execute(controller, &desired, &entries, &mut state, &spinner).await;
    spinner.finish_and_clear();
    let outcomes = result?;

    let out = output::render_list(&global.output, &outcomes, |o| OutcomeRow::from(o), |o| {
        format!("{}\t{}", o.result, o.id)
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use dirplug_core::ObservedPlugin;
    use dirplug_core::registry::observed_from_attributes;

    fn applied(state: LifecycleState, ops: Vec<Operation>) -> Applied {
        Applied {
            plugin: ObservedPlugin {
                id: "x".into(),
                kind: PluginKind::Delay,
                attributes: observed_from_attributes(PluginKind::Delay, &serde_json::Map::new())
                    .unwrap(),
            },
            state,
            ops,
        }
    }

    #[test]
    fn result_labels() {
        let op = Operation::replace("enabled", vec!["true".into()]);
        assert_eq!(
            applied_result(
                Some(&PlannedChange::Create),
                &applied(LifecycleState::Managed, Vec::new())
            ),
            "created"
        );
        assert_eq!(
            applied_result(None, &applied(LifecycleState::Adopted, Vec::new())),
            "adopted"
        );
        assert_eq!(
            applied_result(None, &applied(LifecycleState::Managed, vec![op])),
            "updated"
        );
        assert_eq!(
            applied_result(
                Some(&PlannedChange::NoChange),
                &applied(LifecycleState::Managed, Vec::new())
            ),
            "unchanged"
        );
        assert_eq!(removal_result(Removal::AlreadyGone), "already-gone");
    }
}
