//! Error types for configuration and engine invocation.

use thiserror::Error;

/// Errors raised while assembling the command-line configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// An engine command was requested but no engine is configured.
    #[error("no automation engine configured; set BDD_FORGE_ENGINE_PATH or pass --engine")]
    MissingEngine,
}
