//! # radassist-cli
//!
//! Command-line entry point for radassist:
//! - `serve`: run the web host
//! - `render`: print one render pass as plain text
//! - `config`: inspect and edit the TOML configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod logging;
