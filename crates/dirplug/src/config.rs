//! CLI configuration: thin wrapper around `dirplug_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--server, --username, --password, --insecure, --timeout).

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use dirplug_core::{AuthCredentials, ControllerConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use dirplug_config::{Config, Profile, config_path, load_config_or_default, save_config};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Where the local tracking file lives.
pub fn state_path(global: &GlobalOpts) -> PathBuf {
    global.state.clone().unwrap_or_else(dirplug_config::state_path)
}

/// Build a `ControllerConfig` from the config file, profile, and CLI overrides.
pub fn build_controller_config(global: &GlobalOpts) -> Result<ControllerConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, &cfg, global);
    }
    if global.profile.is_some() {
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available_profiles(&cfg),
        });
    }

    // No profile: everything has to come from flags / env vars.
    let server = global.server.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;
    let (Some(username), Some(password)) = (&global.username, &global.password) else {
        return Err(CliError::NoCredentials {
            profile: profile_name,
        });
    };

    let mut config = ControllerConfig::new(
        dirplug_config::parse_server(server)?,
        AuthCredentials::Basic {
            username: username.clone(),
            password: SecretString::from(password.clone()),
        },
    );
    if global.insecure {
        config.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    Ok(config)
}

/// Translate a `Profile` + global flags into a `ControllerConfig`.
///
/// CLI flag overrides take priority over profile values.
fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    cfg: &Config,
    global: &GlobalOpts,
) -> Result<ControllerConfig, CliError> {
    let mut effective = profile.clone();
    if let Some(ref server) = global.server {
        effective.server.clone_from(server);
    }
    if let Some(ref username) = global.username {
        effective.username = Some(username.clone());
    }

    let mut config = match global.password {
        None => dirplug_config::profile_to_controller_config(&effective, profile_name, &cfg.defaults)?,
        Some(ref password) => {
            let username = effective.username.clone().ok_or_else(|| CliError::NoCredentials {
                profile: profile_name.into(),
            })?;
            let mut config = ControllerConfig::new(
                dirplug_config::parse_server(&effective.server)?,
                AuthCredentials::Basic {
                    username,
                    password: SecretString::from(password.clone()),
                },
            );
            config.tls = dirplug_config::resolve_tls(&effective, &cfg.defaults);
            config.timeout =
                Duration::from_secs(effective.timeout.unwrap_or(cfg.defaults.timeout));
            config
        }
    };

    if global.insecure {
        config.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    Ok(config)
}

fn available_profiles(cfg: &Config) -> String {
    if cfg.profiles.is_empty() {
        "(none)".into()
    } else {
        cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
