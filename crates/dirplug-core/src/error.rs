// ── Core error types ──
//
// User-facing errors from dirplug-core. Consumers never see raw HTTP
// status codes or JSON parse failures; the `From<dirplug_api::Error>`
// impl translates transport-layer errors into domain variants.

use thiserror::Error;

/// Contract violations found while building or decoding a snapshot.
///
/// Always fatal. Messages name the offending attribute or discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("plugin '{id}' carries no recognised plugin schema")]
    NoVariant { id: String },

    #[error("plugin '{id}' carries more than one plugin schema: {}", variants.join(", "))]
    MultipleVariants { id: String, variants: Vec<String> },

    #[error("unknown plugin variant '{name}'")]
    UnknownVariant { name: String },

    #[error("'{attribute}' is not an attribute of {variant}")]
    UnknownAttribute { variant: String, attribute: String },

    #[error("'{attribute}' is computed by the server and cannot be set on {variant}")]
    ComputedAttribute { variant: String, attribute: String },

    #[error("{variant} requires '{attribute}'")]
    MissingRequired { variant: String, attribute: String },

    #[error("'{attribute}' expects {expected}, got {found}")]
    TypeMismatch {
        attribute: String,
        expected: &'static str,
        found: String,
    },

    #[error("'{value}' is not a valid value for '{attribute}' (allowed: {allowed})")]
    UnknownEnumValue {
        attribute: String,
        value: String,
        allowed: String,
    },
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to server at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Server request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Not found: {entity_type} '{identifier}'")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    #[error("Schema violation: {0}")]
    Schema(#[from] SchemaError),

    #[error("Plugin '{id}' is a {found} plugin, not {expected}")]
    VariantMismatch {
        id: String,
        expected: String,
        found: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Operation not supported: {operation} on {variant}")]
    Unsupported { operation: String, variant: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<dirplug_api::Error> for CoreError {
    fn from(err: dirplug_api::Error) -> Self {
        match err {
            dirplug_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            dirplug_api::Error::Forbidden { message } => CoreError::PermissionDenied { message },
            dirplug_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            dirplug_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            dirplug_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            dirplug_api::Error::NotFound { path } => CoreError::NotFound {
                entity_type: "resource".into(),
                identifier: path,
            },
            dirplug_api::Error::Api { status, detail } => CoreError::Api {
                message: detail,
                status: Some(status),
            },
            dirplug_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
