// ── Runtime connection configuration ──
//
// These types describe *how* to reach a directory server's configuration
// API. They carry credential data and connection tuning, but never touch
// disk. The CLI constructs a `ControllerConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// How to authenticate with the configuration API.
#[derive(Debug, Clone)]
pub enum AuthCredentials {
    /// HTTP basic auth (root or topology administrator).
    Basic {
        username: String,
        password: SecretString,
    },
    /// Pre-issued OAuth bearer token.
    Bearer(SecretString),
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed certs).
    DangerAcceptInvalid,
}

/// Configuration for one directory server.
///
/// Built by the CLI, passed to `PluginController`. Core never reads
/// config files.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Server URL (e.g., `https://ds.example.com:1443`).
    pub url: Url,
    pub auth: AuthCredentials,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ControllerConfig {
    /// Config with strict TLS and a 30s timeout.
    pub fn new(url: Url, auth: AuthCredentials) -> Self {
        Self {
            url,
            auth,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}
