//! Config subcommand handlers.

use dialoguer::{Input, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config for display, masking sensitive fields.
fn format_config_redacted(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "color = \"{}\"", cfg.defaults.color);
    let _ = writeln!(out, "insecure = {}", cfg.defaults.insecure);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    for (name, p) in &cfg.profiles {
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "server = \"{}\"", p.server);
        if let Some(ref u) = p.username {
            let _ = writeln!(out, "username = \"{u}\"");
        }
        if p.password.is_some() {
            let _ = writeln!(out, "password = \"{}\"", output::MASK);
        }
        if let Some(ref env) = p.password_env {
            let _ = writeln!(out, "password_env = \"{env}\"");
        }
        if let Some(ref env) = p.token_env {
            let _ = writeln!(out, "token_env = \"{env}\"");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
    }

    out.trim_end().to_owned()
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn prompt_password() -> Result<String, CliError> {
    let pass = rpassword::prompt_password("Password: ").map_err(prompt_err)?;
    if pass.is_empty() {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "password cannot be empty".into(),
        });
    }
    Ok(pass)
}

// ── Handlers ────────────────────────────────────────────────────────

fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let config_path = config::config_path();
    eprintln!("dirplug configuration wizard");
    eprintln!("   Config path: {}\n", config_path.display());

    let profile_name: String = Input::new()
        .with_prompt("Profile name")
        .default(global.profile.clone().unwrap_or_else(|| "default".into()))
        .interact_text()
        .map_err(prompt_err)?;

    let server: String = Input::new()
        .with_prompt("Server URL")
        .default("https://localhost:1443".into())
        .interact_text()
        .map_err(prompt_err)?;
    dirplug_config::parse_server(&server)?;

    let username: String = Input::new()
        .with_prompt("Bind DN")
        .default("cn=Directory Manager".into())
        .interact_text()
        .map_err(prompt_err)?;

    let password = prompt_password()?;
    let storage = Select::new()
        .with_prompt("Where to store the password?")
        .items(&[
            "Store in system keyring (recommended)",
            "Save to config file (plaintext)",
        ])
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    let plaintext = if storage == 0 {
        dirplug_config::store_password(&profile_name, &password)?;
        eprintln!("   Password stored in system keyring");
        None
    } else {
        Some(password)
    };

    let insecure = dialoguer::Confirm::new()
        .with_prompt("Accept self-signed certificates?")
        .default(false)
        .interact()
        .map_err(prompt_err)?;

    let mut cfg = config::load_config_or_default();
    cfg.profiles.insert(
        profile_name.clone(),
        Profile {
            server,
            username: Some(username),
            password: plaintext,
            insecure: insecure.then_some(true),
            ..Profile::default()
        },
    );
    if cfg.profiles.len() == 1 {
        cfg.default_profile = Some(profile_name.clone());
    }

    let path = config::save_config(&cfg)?;
    eprintln!("\n   Profile '{profile_name}' saved to {}", path.display());
    Ok(())
}

fn set_password(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();
    let profile_name = config::active_profile_name(global, &cfg);
    if !cfg.profiles.contains_key(&profile_name) {
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", "),
        });
    }

    let password = prompt_password()?;
    dirplug_config::store_password(&profile_name, &password)?;
    if !global.quiet {
        eprintln!("Password for profile '{profile_name}' stored in system keyring");
    }
    Ok(())
}

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            output::print_output(&format_config_redacted(&cfg), global.quiet);
            Ok(())
        }
        ConfigCommand::SetPassword => set_password(global),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacted_config_hides_password() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "lab".into(),
            Profile {
                server: "https://ds.lab:1443".into(),
                username: Some("cn=Directory Manager".into()),
                password: Some("hunter2".into()),
                ..Profile::default()
            },
        );
        let text = format_config_redacted(&cfg);
        assert!(!text.contains("hunter2"), "{text}");
        assert!(text.contains("[profiles.lab]"));
        assert!(text.contains("password = \"********\""));
    }
}
