//! Argument definitions.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

/// radassist - Radiology Assistant greeting page
#[derive(Parser, Debug)]
#[command(name = "radassist")]
#[command(version, about = "Radiology Assistant greeting page", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "RADASSIST_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the web host
    Serve {
        /// Listen address, overriding `server.host` and `server.port`
        #[arg(long)]
        listen: Option<SocketAddr>,
    },
    /// Print one render pass as plain text
    Render {
        /// Value of the name input (defaults to `page.default_name`)
        #[arg(long)]
        name: Option<String>,
        /// Click the button in this pass
        #[arg(long)]
        click: bool,
    },
    /// Configuration operations
    Config {
        /// Config operation to run
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. `server.port`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value (taken verbatim for text settings)
        value: String,
    },
    /// Write a default config file
    Init {
        /// Target file (defaults to the platform config path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for `docker run`
        #[arg(long)]
        docker_env: bool,
    },
}
