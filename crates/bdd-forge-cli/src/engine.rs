//! Invocation of the external automation engine.
//!
//! Running features is the engine's job. This module only assembles the
//! command so that it can be shown to the user or handed to a process
//! supervisor.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::EngineConfig;
use crate::error::ConfigError;

/// A fully assembled engine command line.
///
/// Arguments are, in order: the feature path, `--settings <path>` when a
/// settings file is configured, then any extra arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInvocation {
    program: PathBuf,
    args: Vec<String>,
}

impl EngineInvocation {
    /// Build the invocation for `feature` from an explicit engine
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEngine`] when no engine path is set.
    pub fn new(
        engine: &EngineConfig,
        feature: &Path,
        extra: &[String],
    ) -> Result<Self, ConfigError> {
        let program = engine.path.clone().ok_or(ConfigError::MissingEngine)?;
        let mut args = vec![feature.to_string_lossy().into_owned()];
        if let Some(settings) = &engine.settings {
            args.push("--settings".to_owned());
            args.push(settings.to_string_lossy().into_owned());
        }
        args.extend(extra.iter().cloned());
        Ok(Self { program, args })
    }

    /// Engine executable.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed to the engine.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// A [`Command`] ready to spawn. The caller decides whether to run it.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    /// Shell-quoted rendering of the whole command line.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a word contains a NUL byte and
    /// cannot be quoted.
    pub fn command_line(&self) -> Result<String, ConfigError> {
        let program = self.program.to_string_lossy();
        let words = std::iter::once(program.as_ref()).chain(self.args.iter().map(String::as_str));
        shlex::try_join(words)
            .map_err(|err| ConfigError::Invalid(format!("cannot quote engine command: {err}")))
    }
}
