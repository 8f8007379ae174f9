//! Command-line front end for `bdd-forge`.
//!
//! The binary exposes each core capability as one subcommand. This library
//! half carries the pieces that are useful on their own: configuration from
//! `BDD_FORGE_*` environment variables, logging setup and the engine
//! invocation value object.
//!
//! # Configuration
//!
//! - `BDD_FORGE_LOG_LEVEL`: log verbosity (trace, debug, info, warn, error)
//! - `BDD_FORGE_ENGINE_PATH`: automation engine executable
//! - `BDD_FORGE_SETTINGS_PATH`: engine settings file
//!
//! `RUST_LOG` directives, when valid, override the configured log level.

mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
mod output;

use std::process::ExitCode;

/// Parse the process arguments and run the selected command.
///
/// # Errors
///
/// Returns an error if configuration is invalid, a file cannot be read or
/// written, or the command's inputs are rejected.
pub fn run() -> eyre::Result<ExitCode> {
    cli::run()
}
