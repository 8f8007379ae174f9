//! Shared keyword-matching utilities for bdd-forge.
//!
//! The crate owns the single definition of the Gherkin step keywords (in both
//! English and Russian) and of the line classifier built on top of them. The
//! permissive feature parser and the step extractor both go through these
//! helpers, so the two consumers can never disagree about what counts as a
//! step line.

mod errors;
mod ident;
mod keyword;
mod line;

pub use errors::StepKeywordParseError;
pub use ident::stub_ident;
pub use keyword::{KeywordMatch, Language, StepKeyword, strip_step_keyword};
pub use line::{LineKind, classify_line};
