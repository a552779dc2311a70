//! epgrid - A terminal programme guide
//!
//! This is the binary entry point. It parses CLI arguments and dispatches
//! to either the TUI or CLI commands.

use std::process::ExitCode;

use clap::Parser;
use epgrid::cli::{exit_code_for_error, Cli, Commands, Exit};
use epgrid::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { Exit::Args } else { Exit::Ok };
            // Help and version go to stdout, usage errors to stderr
            let _ = e.print();
            return code.into();
        }
    };

    match run(cli).await {
        Ok(()) => Exit::Ok.into(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for_error(&e).into()
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load configuration with proper precedence
    let config = Config::load(&cli)?;

    // Initialize logging (to file, not stderr; the TUI owns the screen)
    let _guard = epgrid::logging::init(&config.logging)?;

    match cli.command {
        Some(Commands::Channels { json }) => epgrid::cli::channels::run(&config, json).await,
        Some(Commands::Schedule { channel, json }) => {
            epgrid::cli::schedule::run(&config, &channel, json).await
        }
        None => {
            // Default: launch TUI
            epgrid::tui::run(config).await
        }
    }
}
