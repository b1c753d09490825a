//! `forget`: drop local tracking. Never contacts the server.

use crate::cli::{ForgetArgs, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;
use crate::state::StateFile;

pub fn handle(args: &ForgetArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut state = StateFile::load(&config::state_path(global))?;
    let object = state.remove(&args.id).ok_or_else(|| CliError::NotFound {
        resource_type: "tracked plugin".into(),
        identifier: args.id.clone(),
        list_command: "list".into(),
    })?;
    state.save()?;

    tracing::info!(id = %object.id, path = %state.path().display(), "tracking dropped");
    output::print_output(
        &format!(
            "Forgot '{}' ({}, last applied {}). The server was not changed.",
            object.id,
            object.kind,
            object.last_applied.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        global.quiet,
    );
    Ok(())
}
