//! Gherkin document model.
//!
//! A [`FeatureDocument`] owns an ordered list of [`ScenarioBlock`]s, and each
//! scenario owns its steps as the original keyword-prefixed text. Documents
//! are built by [`parse`] or by the scenario synthesizer and are not mutated
//! afterwards; the public API only exposes read access.
//!
//! Rendering through [`Display`](std::fmt::Display) produces text that
//! [`parse`] turns back into an equal document.

use std::fmt;

use bdd_forge_patterns::{Language, StepKeyword};
use serde::Serialize;

mod parse;

pub use parse::{ParseReport, SkipReason, SkippedLine, parse, parse_with_report};

/// A single feature block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureDocument {
    name: String,
    language: Language,
    scenarios: Vec<ScenarioBlock>,
}

impl FeatureDocument {
    /// Create a feature from its parts.
    ///
    /// Callers must pass keyword-prefixed single-line steps and single-line
    /// names, otherwise the rendered text no longer parses back to `self`.
    #[must_use]
    pub(crate) fn new(
        name: impl Into<String>,
        language: Language,
        scenarios: Vec<ScenarioBlock>,
    ) -> Self {
        Self {
            name: name.into(),
            language,
            scenarios,
        }
    }

    /// Feature name as written after the header colon.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Language of the feature header.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Scenarios in declaration order.
    #[must_use]
    pub fn scenarios(&self) -> &[ScenarioBlock] {
        &self.scenarios
    }

    pub(crate) fn scenarios_mut(&mut self) -> &mut Vec<ScenarioBlock> {
        &mut self.scenarios
    }
}

impl fmt::Display for FeatureDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.language != Language::English {
            writeln!(f, "{}", self.language.pragma())?;
        }
        writeln!(f, "{} {}", self.language.feature_header(), self.name)?;
        for scenario in &self.scenarios {
            writeln!(f)?;
            writeln!(
                f,
                "  {} {}",
                self.language.scenario_header(),
                scenario.name
            )?;
            for step in &scenario.steps {
                writeln!(f, "    {step}")?;
            }
        }
        Ok(())
    }
}

/// A scenario and its steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioBlock {
    name: String,
    steps: Vec<String>,
}

impl ScenarioBlock {
    /// Create a scenario from a name and keyword-prefixed step lines.
    #[must_use]
    pub(crate) fn new(name: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Scenario name as written after the header colon.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Steps in execution order, keyword included.
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Split each step into its keyword, resolved role and body.
    ///
    /// `And`/`But` resolve to the preceding primary keyword, defaulting to
    /// `Given` at the start of a scenario.
    ///
    /// ```
    /// use bdd_forge::{StepKeyword, parse};
    ///
    /// let features = parse("Функционал: F\nСценарий: s\n  Когда я жду\n  И я смотрю\n");
    /// let scenario = &features[0].scenarios()[0];
    /// let roles: Vec<_> = scenario.classified_steps().map(|s| s.role).collect();
    /// assert_eq!(roles, [StepKeyword::When, StepKeyword::When]);
    /// ```
    pub fn classified_steps(&self) -> impl Iterator<Item = ClassifiedStep<'_>> + '_ {
        let mut prev = None;
        self.steps.iter().filter_map(move |line| {
            let found = StepKeyword::match_line(line)?;
            Some(ClassifiedStep {
                keyword: found.keyword,
                language: found.language,
                role: found.keyword.resolve(&mut prev),
                body: found.body,
            })
        })
    }

    pub(crate) fn push_step(&mut self, line: &str) {
        self.steps.push(line.to_owned());
    }
}

/// A step split by [`ScenarioBlock::classified_steps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedStep<'a> {
    /// Keyword literally written on the line.
    pub keyword: StepKeyword,
    /// Language the keyword was written in.
    pub language: Language,
    /// Keyword after resolving conjunctions.
    pub role: StepKeyword,
    /// Step text without the keyword.
    pub body: &'a str,
}
