//! Command handlers.

pub mod apply;
pub mod config_cmd;
pub mod forget;
pub mod list;
pub mod plan;
pub mod show;
pub mod util;
pub mod variants;

use dirplug_core::PluginController;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Run a command that talks to the server.
pub async fn dispatch(
    cmd: Command,
    controller: &PluginController,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Plan(args) => plan::handle(controller, &args, global).await,
        Command::Apply(args) => apply::handle(controller, &args, global).await,
        Command::Show(args) => show::handle(controller, &args, global).await,
        Command::List => list::handle(controller, global).await,
        Command::Forget(_) | Command::Variants(_) | Command::Config(_) | Command::Completions(_) => {
            Err(CliError::Internal(
                "offline command routed to the server dispatcher".into(),
            ))
        }
    }
}
