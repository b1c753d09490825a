//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use dirplug_core::{AttributeValue, Operation, PlannedChange, PluginKind};

use crate::cli::{ColorMode, OutputFormat};

/// Shown in place of sensitive attribute values.
pub const MASK: &str = "********";

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// One-character change marker, colored when enabled.
pub fn change_marker(change: &PlannedChange, color: bool) -> String {
    let marker = match change {
        PlannedChange::Create => "+",
        PlannedChange::Adopt { .. } | PlannedChange::Update { .. } => "~",
        PlannedChange::NoChange => "=",
        PlannedChange::Delete => "-",
        PlannedChange::Forget => "?",
    };
    if !color {
        return marker.to_owned();
    }
    match change {
        PlannedChange::Create => marker.green().to_string(),
        PlannedChange::Adopt { .. } | PlannedChange::Update { .. } => marker.yellow().to_string(),
        PlannedChange::Delete => marker.red().to_string(),
        PlannedChange::NoChange | PlannedChange::Forget => marker.dimmed().to_string(),
    }
}

// ── Masking ──────────────────────────────────────────────────────────

fn is_sensitive(kind: PluginKind, attribute: &str) -> bool {
    kind.descriptor()
        .attribute(attribute)
        .is_some_and(|a| a.sensitive)
}

/// Human-readable attribute value with sensitive attributes masked.
pub fn display_value(kind: PluginKind, attribute: &str, value: &AttributeValue) -> String {
    if is_sensitive(kind, attribute) && !value.is_absent() {
        MASK.to_owned()
    } else {
        value.to_string()
    }
}

/// Copy of `op` with its values masked if the attribute is sensitive.
pub fn mask_operation(kind: PluginKind, op: &Operation) -> Operation {
    if is_sensitive(kind, &op.attribute) {
        Operation {
            values: op.values.iter().map(|_| MASK.to_owned()).collect(),
            ..op.clone()
        }
    } else {
        op.clone()
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted
/// string, since single-item detail views don't use `Tabled` derive.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => id_fn(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {e}\"}}"))
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).unwrap_or_else(|e| format!("error: serialization failed: {e}"))
}
