use thiserror::Error;

/// Top-level error type for the `dirplug-api` crate.
///
/// Covers every failure mode of the configuration API surface:
/// authentication, transport, HTTP status errors, and body decoding.
/// `dirplug-core` maps these into domain errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Credentials were rejected (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The authenticated user lacks the required privilege (HTTP 403).
    #[error("Permission denied: {message}")]
    Forbidden { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Configuration API ───────────────────────────────────────────
    /// The requested configuration object does not exist (HTTP 404).
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// Any other non-success status, with the SCIM error detail if present.
    #[error("Configuration API error (HTTP {status}): {detail}")]
    Api { status: u16, detail: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the credentials were rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// The client itself never retries; callers decide.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => matches!(status, 502..=504),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }
}
