//! Core library for `bdd-forge`.
//!
//! This crate reads and writes Gherkin feature files with English and Russian
//! keywords, collects the distinct steps they use and renders placeholder
//! procedures for them. It also synthesizes single-scenario features from
//! high-level automation intents and generates test data for Russian
//! registration identifiers.
//!
//! # Examples
//!
//! ```
//! let text = "# language: ru\nФункционал: Вход\n  Сценарий: Успешный вход\n    Дано открыто окно\n    Когда я нажимаю \"Войти\"\n";
//! let features = bdd_forge::parse(text);
//! assert_eq!(features.len(), 1);
//!
//! let steps = bdd_forge::extract_steps(text);
//! assert_eq!(steps.to_vec(), ["открыто окно", "я нажимаю \"Войти\""]);
//! ```

mod error;
pub mod feature;
pub mod generators;
mod loader;
pub mod scenario;
mod steps;

pub use bdd_forge_patterns::{Language, StepKeyword};
pub use error::{Error, Result};
pub use feature::{FeatureDocument, ParseReport, ScenarioBlock, parse, parse_with_report};
pub use loader::{load_feature, validate_strict};
pub use steps::{StepSet, extract_steps, render_stubs, write_stubs};
