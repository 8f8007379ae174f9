//! Structured logging for the command-line tool.
//!
//! Logs go to stderr so that stdout carries only command output and can be
//! piped into other tools.

use std::io::{self, IsTerminal};

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Build the event filter from `RUST_LOG`-style directives, falling back to
/// the configured level when they are absent, blank or malformed.
fn build_filter(config: &CliConfig, directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(config.log_level.as_filter_str()))
}

/// Initialise the logging subsystem based on configuration.
///
/// Filter precedence (highest to lowest):
///
/// 1. `RUST_LOG` directives, for per-target filtering such as
///    `bdd_forge=debug`
/// 2. CLI `--log-level` (parsed into `config.log_level`)
/// 3. `BDD_FORGE_LOG_LEVEL` (parsed into `config.log_level`)
/// 4. Default configuration value
///
/// Malformed `RUST_LOG` directives are ignored with a warning. If a global
/// subscriber is already set the call does nothing, so repeated
/// initialisation is harmless.
pub fn init_logging(config: &CliConfig) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config, directives.as_deref()))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true)
        .without_time()
        .compact()
        .finish();

    // The first subscriber wins.
    let _ = tracing::subscriber::set_global_default(subscriber);

    if let Some(rejected) = directives
        .as_deref()
        .filter(|directives| EnvFilter::try_new(directives).is_err())
    {
        warn!(directives = rejected, "ignoring malformed RUST_LOG");
    }
}
