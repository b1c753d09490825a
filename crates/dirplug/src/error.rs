//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use dirplug_config::ConfigError;
use dirplug_core::{CoreError, SchemaError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const SCHEMA: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to server at {url}")]
    #[diagnostic(
        code(dirplug::connection_failed),
        help(
            "Check that the server is running and its configuration API is reachable.\n\
             URL: {url}\n\
             Self-signed certificate? Retry with --insecure (-k) or set ca_cert in your profile."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(dirplug::auth_failed),
        help(
            "Verify the bind DN and password for profile '{profile}'.\n\
             Run: dirplug config set-password --profile {profile}"
        )
    )]
    AuthFailed { profile: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(dirplug::no_credentials),
        help(
            "Configure credentials with: dirplug config init\n\
             Or set DIRPLUG_USERNAME and DIRPLUG_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    #[error("Permission denied: {message}")]
    #[diagnostic(
        code(dirplug::permission_denied),
        help("The bind user needs the config-read and config-write privileges.")
    )]
    PermissionDenied { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(dirplug::not_found),
        help("Run: dirplug {list_command} to see what exists")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("Plugin '{id}' is a {found} plugin, not {expected}")]
    #[diagnostic(
        code(dirplug::variant_mismatch),
        help("Change the manifest entry's type to '{found}', or pick a different id.")
    )]
    VariantMismatch {
        id: String,
        expected: String,
        found: String,
    },

    #[error("Cannot {operation}: {variant}")]
    #[diagnostic(
        code(dirplug::unsupported),
        help(
            "Edit-only plugins ship with the server and can only be modified.\n\
             Run: dirplug list to see the plugins present on the server"
        )
    )]
    Unsupported { operation: String, variant: String },

    // ── Schema ───────────────────────────────────────────────────────
    #[error("Invalid plugin '{id}' in {path}")]
    #[diagnostic(
        code(dirplug::manifest),
        help("Run: dirplug variants <type> to see the attributes a variant accepts")
    )]
    Manifest {
        path: String,
        id: String,
        #[source]
        source: SchemaError,
    },

    #[error("Server returned a plugin this tool cannot decode")]
    #[diagnostic(
        code(dirplug::schema),
        help("The server may be newer than this tool. Run: dirplug variants")
    )]
    Schema(#[source] SchemaError),

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error{}: {message}", status.map(|s| format!(" ({s})")).unwrap_or_default())]
    #[diagnostic(code(dirplug::api_error))]
    ApiError {
        status: Option<u16>,
        message: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(dirplug::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(dirplug::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: dirplug config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No server configured")]
    #[diagnostic(
        code(dirplug::no_config),
        help(
            "Create a profile with: dirplug config init\n\
             Or pass --server / set DIRPLUG_SERVER.\n\
             Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(dirplug::config))]
    Config(Box<ConfigError>),

    #[error("State file {path} is unreadable: {reason}")]
    #[diagnostic(
        code(dirplug::state),
        help("Fix or remove the file. Removing it only drops local tracking.")
    )]
    State { path: String, reason: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(dirplug::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Timeout ──────────────────────────────────────────────────────
    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(dirplug::timeout),
        help("Increase timeout with --timeout or check server responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    #[diagnostic(code(dirplug::json))]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(dirplug::internal))]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::PermissionDenied { .. } | Self::Unsupported { .. } => exit_code::PERMISSION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::VariantMismatch { .. } => exit_code::CONFLICT,
            Self::Manifest { .. } | Self::Schema(_) => exit_code::SCHEMA,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. }
            | Self::ProfileNotFound { .. }
            | Self::NoConfig { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::AuthenticationFailed { message: _ } => CliError::AuthFailed {
                profile: "current".into(),
            },

            CoreError::PermissionDenied { message } => CliError::PermissionDenied { message },

            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::NotFound {
                entity_type,
                identifier,
            } => CliError::NotFound {
                resource_type: entity_type,
                identifier,
                list_command: "list".into(),
            },

            CoreError::Schema(source) => CliError::Schema(source),

            CoreError::VariantMismatch {
                id,
                expected,
                found,
            } => CliError::VariantMismatch {
                id,
                expected,
                found,
            },

            CoreError::Unsupported { operation, variant } => {
                CliError::Unsupported { operation, variant }
            }

            CoreError::Api { message, status } => CliError::ApiError { status, message },

            CoreError::Config { message } => CliError::Validation {
                field: "configuration".into(),
                reason: message,
            },

            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: "(none)".into(),
            },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(Box::new(other)),
        }
    }
}
