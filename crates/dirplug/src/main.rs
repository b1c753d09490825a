mod cli;
mod commands;
mod config;
mod error;
mod manifest;
mod output;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dirplug_core::PluginController;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Offline commands: no server connection
        Command::Config(ref args) => commands::config_cmd::handle(args, &cli.global),
        Command::Variants(ref args) => commands::variants::handle(args, &cli.global),
        Command::Forget(ref args) => commands::forget::handle(args, &cli.global),

        Command::Completions(ref args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "dirplug", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let controller_config = config::build_controller_config(&cli.global)?;
            tracing::debug!(server = %controller_config.url, "connecting");
            let controller = PluginController::new(controller_config)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &controller, &cli.global).await
        }
    }
}
