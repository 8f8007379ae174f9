//! Command-line configuration parsed from environment variables.
//!
//! Every setting can be supplied through an environment variable prefixed
//! with `BDD_FORGE_` and overridden by the matching command-line flag.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "BDD_FORGE_LOG_LEVEL";
/// Environment variable holding the automation engine executable.
pub const ENGINE_PATH_VAR: &str = "BDD_FORGE_ENGINE_PATH";
/// Environment variable holding the engine settings file.
pub const SETTINGS_PATH_VAR: &str = "BDD_FORGE_SETTINGS_PATH";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so that command output is not drowned in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes every dropped feature line.
    Trace,
    /// Debug-level information for development.
    Debug,
    /// Standard informational messages such as written files.
    Info,
    /// Warning messages for potentially problematic situations.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::Invalid(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Location of the external automation engine.
///
/// The engine is never launched by this tool; the configuration only feeds
/// [`EngineInvocation`](crate::engine::EngineInvocation).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Engine executable.
    pub path: Option<PathBuf>,
    /// Settings file handed to the engine.
    pub settings: Option<PathBuf>,
}

/// Configuration for the `bdd-forge` binary.
///
/// # Environment Variables
///
/// - `BDD_FORGE_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `BDD_FORGE_ENGINE_PATH`: automation engine executable
/// - `BDD_FORGE_SETTINGS_PATH`: engine settings file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// External engine location.
    pub engine: EngineConfig,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value. Missing and blank values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_level = read(LOG_LEVEL_VAR)
            .map(|value| value.parse::<LogLevel>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            log_level,
            engine: EngineConfig {
                path: read(ENGINE_PATH_VAR).map(PathBuf::from),
                settings: read(SETTINGS_PATH_VAR).map(PathBuf::from),
            },
        })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// This is intended for CLI flags that take precedence over
    /// environment-based values.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        engine_path: Option<PathBuf>,
        settings_path: Option<PathBuf>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if engine_path.is_some() {
            self.engine.path = engine_path;
        }
        if settings_path.is_some() {
            self.engine.settings = settings_path;
        }
        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("Debug", LogLevel::Debug)]
    #[case("INFO", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case(" error ", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let message = "loud".parse::<LogLevel>().err().map(|e| e.to_string());
        assert!(message.is_some_and(|m| m.contains("unknown log level 'loud'")));
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = CliConfig::from_lookup(|_| None).ok();
        assert_eq!(config, Some(CliConfig::default()));
        assert_eq!(CliConfig::default().log_level, LogLevel::Warn);
    }

    #[test]
    fn reads_every_variable() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_VAR, "debug"),
            (ENGINE_PATH_VAR, "/opt/engine/run"),
            (SETTINGS_PATH_VAR, "settings.json"),
        ]))
        .ok();
        assert_eq!(
            config,
            Some(CliConfig {
                log_level: LogLevel::Debug,
                engine: EngineConfig {
                    path: Some(PathBuf::from("/opt/engine/run")),
                    settings: Some(PathBuf::from("settings.json")),
                },
            })
        );
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_VAR, "  "),
            (ENGINE_PATH_VAR, ""),
        ]))
        .ok();
        assert_eq!(config, Some(CliConfig::default()));
    }

    #[test]
    fn invalid_log_level_is_reported() {
        let result = CliConfig::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "chatty")]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn overrides_take_precedence() {
        let base = CliConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_VAR, "info"),
            (ENGINE_PATH_VAR, "env-engine"),
            (SETTINGS_PATH_VAR, "env.json"),
        ]))
        .unwrap_or_default();
        let config = base.apply_overrides(Some(LogLevel::Error), Some("flag-engine".into()), None);
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.engine.path, Some(PathBuf::from("flag-engine")));
        assert_eq!(config.engine.settings, Some(PathBuf::from("env.json")));

        let untouched = config.clone().apply_overrides(None, None, None);
        assert_eq!(untouched, config);
    }

    #[test]
    fn with_log_level_builder() {
        let config = CliConfig::default().with_log_level(LogLevel::Trace);
        assert_eq!(config.log_level, LogLevel::Trace);
    }
}
