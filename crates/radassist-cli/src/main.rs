//! radassist CLI
//!
//! Serves the Radiology Assistant greeting page and manages its configuration.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use radassist_cli::cli::{Cli, Command};
use radassist_cli::{commands, config_handlers, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Serve { listen } => {
            if let Err(e) = commands::cmd_serve(config_path, listen).await {
                tracing::error!("server failed: {e}");
                return Err(e.into());
            }
        }
        Command::Render { name, click } => {
            print!("{}", commands::cmd_render(config_path, name, click)?);
        }
        Command::Config { action } => {
            config_handlers::handle_config_command(config_path, action)?;
        }
    }

    Ok(())
}
