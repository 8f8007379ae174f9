//! Permissive, line-oriented feature parser.
//!
//! # Contract
//!
//! Parsing never fails. Lines that cannot be placed in the document are
//! dropped rather than reported as errors: a `Scenario:` before any
//! `Feature:`, a step before any `Scenario:`, and any unrecognised line. This
//! keeps the parser usable on partially written files, but it also means
//! malformed input silently loses content. Callers that need to know what was
//! dropped use [`parse_with_report`]; callers that need conformance checking
//! use [`validate_strict`](crate::validate_strict).

use std::fmt;

use bdd_forge_patterns::{LineKind, classify_line};
use serde::Serialize;
use tracing::debug;

use super::{FeatureDocument, ScenarioBlock};

/// Why a line was left out of the parsed documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A scenario header appeared before any feature header.
    OrphanScenario,
    /// A step appeared before any scenario header of the current feature.
    OrphanStep,
    /// The line matched no header or step keyword.
    Unrecognised,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OrphanScenario => "scenario outside a feature",
            Self::OrphanStep => "step outside a scenario",
            Self::Unrecognised => "unrecognised line",
        })
    }
}

/// A line dropped by the permissive parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    /// Classification of the drop.
    pub reason: SkipReason,
    /// Trimmed line text.
    pub text: String,
}

/// Outcome of [`parse_with_report`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Parsed feature documents in source order.
    pub features: Vec<FeatureDocument>,
    /// Lines that were dropped. Blank lines, comments and tags never appear.
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    /// Whether every meaningful line ended up in a document.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Parse feature text into documents.
///
/// See the [module documentation](self) for the non-throwing contract.
///
/// ```
/// let features = bdd_forge::parse("Feature: Demo\n  Scenario: One\n    Given a step\n");
/// assert_eq!(features.len(), 1);
/// assert_eq!(features[0].scenarios()[0].steps(), ["Given a step"]);
/// ```
#[must_use]
pub fn parse(text: &str) -> Vec<FeatureDocument> {
    parse_with_report(text).features
}

/// Parse feature text and record every line the parser dropped.
#[must_use]
pub fn parse_with_report(text: &str) -> ParseReport {
    let mut report = ParseReport::default();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let reason = match classify_line(raw) {
            LineKind::Blank | LineKind::Comment | LineKind::Tag => None,
            LineKind::Feature { name, language } => {
                report
                    .features
                    .push(FeatureDocument::new(name, language, Vec::new()));
                None
            }
            LineKind::Scenario { name, .. } => report.features.last_mut().map_or(
                Some(SkipReason::OrphanScenario),
                |feature| {
                    feature
                        .scenarios_mut()
                        .push(ScenarioBlock::new(name, Vec::new()));
                    None
                },
            ),
            LineKind::Step(_) => current_scenario(&mut report.features).map_or(
                Some(SkipReason::OrphanStep),
                |scenario| {
                    scenario.push_step(raw.trim());
                    None
                },
            ),
            LineKind::Other(_) => Some(SkipReason::Unrecognised),
        };
        if let Some(reason) = reason {
            debug!(line, ?reason, "dropping feature line");
            report.skipped.push(SkippedLine {
                line,
                reason,
                text: raw.trim().to_owned(),
            });
        }
    }
    report
}

fn current_scenario(features: &mut [FeatureDocument]) -> Option<&mut ScenarioBlock> {
    features.last_mut()?.scenarios_mut().last_mut()
}
