//! Error taxonomy for the core library.
//!
//! The permissive parser never produces these errors; they come from file
//! access, synthesizer preconditions, closed-set string parsing and the
//! optional strict validation pass.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by bdd-forge operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced feature file does not exist.
    #[error("feature file not found: {}", .path.display())]
    NotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// A synthesizer or generator precondition was violated.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// A string did not name a member of a closed set.
    #[error("unknown {kind} '{value}', expected one of: {expected}")]
    UnknownVariant {
        /// What was being parsed, e.g. `action` or `data type`.
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated accepted values.
        expected: String,
    },

    /// The strict Gherkin parser rejected the document.
    #[error("invalid Gherkin: {0}")]
    Gherkin(#[from] gherkin::ParseError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn unknown_variant(kind: &'static str, value: &str, accepted: &[&str]) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_owned(),
            expected: accepted.join(", "),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
