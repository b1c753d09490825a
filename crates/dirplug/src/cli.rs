//! Clap derive structures for the `dirplug` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// dirplug -- declarative plugin configuration for directory servers
#[derive(Debug, Parser)]
#[command(
    name = "dirplug",
    version,
    about = "Reconcile directory server plugins against a declarative manifest",
    long_about = "Plans and applies plugin configuration through the directory server's\n\
        configuration REST API.\n\n\
        Plugins declared in a manifest are created, adopted, or updated with\n\
        minimal LDAP-style modify operations. Plugins dropped from the manifest\n\
        are deleted, or forgotten when the server does not allow deleting them.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "DIRPLUG_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server URL (overrides profile)
    #[arg(long, short = 's', env = "DIRPLUG_SERVER", global = true)]
    pub server: Option<String>,

    /// Bind user for basic auth (overrides profile)
    #[arg(long, short = 'u', env = "DIRPLUG_USERNAME", global = true)]
    pub username: Option<String>,

    /// Bind password (prefer the keyring; see `config set-password`)
    #[arg(long, env = "DIRPLUG_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "DIRPLUG_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "DIRPLUG_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "DIRPLUG_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Local tracking file
    #[arg(long, env = "DIRPLUG_STATE", global = true)]
    pub state: Option<PathBuf>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show what applying a manifest would change
    Plan(ManifestArgs),

    /// Converge the server to a manifest
    Apply(ManifestArgs),

    /// Show one plugin as the server reports it
    Show(ShowArgs),

    /// List plugins on the server
    #[command(alias = "ls")]
    List,

    /// Stop tracking a plugin without touching the server
    Forget(ForgetArgs),

    /// Describe the plugin variants this tool understands
    Variants(VariantsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Command Arguments ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ManifestArgs {
    /// Manifest file (.toml, .yaml, .yml, or .json)
    #[arg(long, short = 'f')]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Plugin name as the server knows it (e.g. "7-Bit Clean")
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ForgetArgs {
    /// Plugin name to drop from local tracking
    pub id: String,
}

#[derive(Debug, Args)]
pub struct VariantsArgs {
    /// Variant name (e.g. "seven-bit-clean"); lists every variant when omitted
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive configuration wizard
    Init,

    /// Display current resolved configuration
    Show,

    /// Store the active profile's password in the system keyring
    SetPassword,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
