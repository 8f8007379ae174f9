//! Bilingual step keyword type and the shared step-line matcher.
//!
//! This module provides the canonical [`StepKeyword`] enum used by both the
//! permissive feature parser and the step extractor. Every keyword carries an
//! English and a Russian literal; classification ignores which language a line
//! was written in, so `Дано` and `Given` map onto the same semantic role.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::errors::StepKeywordParseError;

/// Natural language a keyword literal or a document header is written in.
///
/// Serialises as its pragma code (`en` or `ru`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Language {
    /// English keywords (`Feature:`, `Given`, ...).
    #[default]
    #[serde(rename = "en")]
    English,
    /// Russian keywords (`Функционал:`, `Дано`, ...).
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    /// Both supported languages, English first.
    pub const ALL: [Self; 2] = [Self::English, Self::Russian];

    /// ISO 639-1 code used by the `# language:` pragma.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    /// Header that opens a feature block, colon included.
    #[must_use]
    pub const fn feature_header(self) -> &'static str {
        match self {
            Self::English => "Feature:",
            Self::Russian => "Функционал:",
        }
    }

    /// Header that opens a scenario block, colon included.
    #[must_use]
    pub const fn scenario_header(self) -> &'static str {
        match self {
            Self::English => "Scenario:",
            Self::Russian => "Сценарий:",
        }
    }

    /// The `# language:` pragma line for this language.
    ///
    /// ```
    /// use bdd_forge_patterns::Language;
    /// assert_eq!(Language::Russian.pragma(), "# language: ru");
    /// ```
    #[must_use]
    pub fn pragma(self) -> String {
        format!("# language: {}", self.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = StepKeywordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ru" | "russian" => Ok(Self::Russian),
            other => Err(StepKeywordParseError::Language(other.to_owned())),
        }
    }
}

/// Keyword used to categorise a Gherkin step.
///
/// The enum includes `And` and `But` for completeness; callers that need the
/// semantic role of a conjunction resolve it against the preceding primary
/// keyword with [`resolve`](Self::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Setup preconditions for a scenario.
    Given,
    /// Perform an action when testing behaviour.
    When,
    /// Assert the expected outcome of a scenario.
    Then,
    /// Additional conditions that share context with the previous step.
    And,
    /// Negative or contrasting conditions.
    But,
}

impl StepKeyword {
    /// All five keywords in declaration order.
    pub const ALL: [Self; 5] = [Self::Given, Self::When, Self::Then, Self::And, Self::But];

    /// Return the English keyword as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdd_forge_patterns::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::And.as_str(), "And");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.literal(Language::English)
    }

    /// Return the keyword literal for `language`.
    ///
    /// ```
    /// use bdd_forge_patterns::{Language, StepKeyword};
    /// assert_eq!(StepKeyword::Then.literal(Language::Russian), "Тогда");
    /// ```
    #[must_use]
    pub const fn literal(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Given, Language::English) => "Given",
            (Self::When, Language::English) => "When",
            (Self::Then, Language::English) => "Then",
            (Self::And, Language::English) => "And",
            (Self::But, Language::English) => "But",
            (Self::Given, Language::Russian) => "Дано",
            (Self::When, Language::Russian) => "Когда",
            (Self::Then, Language::Russian) => "Тогда",
            (Self::And, Language::Russian) => "И",
            (Self::But, Language::Russian) => "Но",
        }
    }

    /// Both literals of the keyword, English first.
    #[must_use]
    pub const fn literals(&self) -> [&'static str; 2] {
        [
            self.literal(Language::English),
            self.literal(Language::Russian),
        ]
    }

    /// Look up the keyword and language owning an exact literal.
    #[must_use]
    pub fn from_literal(literal: &str) -> Option<(Self, Language)> {
        Self::ALL.into_iter().find_map(|keyword| {
            Language::ALL
                .into_iter()
                .find(|language| keyword.literal(*language) == literal)
                .map(|language| (keyword, language))
        })
    }

    /// Resolve conjunctions to the semantic keyword of the previous step.
    ///
    /// When the current keyword is `And` or `But`, returns the value stored in
    /// `prev`. For primary keywords (`Given`/`When`/`Then`), updates `prev` and
    /// returns the keyword unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bdd_forge_patterns::StepKeyword;
    ///
    /// let mut prev = Some(StepKeyword::Given);
    /// assert_eq!(StepKeyword::And.resolve(&mut prev), StepKeyword::Given);
    /// assert_eq!(StepKeyword::When.resolve(&mut prev), StepKeyword::When);
    /// assert_eq!(prev, Some(StepKeyword::When));
    /// ```
    #[must_use]
    pub fn resolve(self, prev: &mut Option<Self>) -> Self {
        if matches!(self, Self::And | Self::But) {
            prev.as_ref().copied().unwrap_or(Self::Given)
        } else {
            *prev = Some(self);
            self
        }
    }

    /// Match a step line against the ten keyword literals.
    ///
    /// The keyword must open the (left-trimmed) line and be followed by
    /// whitespace or the end of the line; prose that merely contains a keyword
    /// never matches.
    ///
    /// ```
    /// use bdd_forge_patterns::{Language, StepKeyword};
    ///
    /// let found = StepKeyword::match_line("  Дано Я на странице входа").unwrap();
    /// assert_eq!(found.keyword, StepKeyword::Given);
    /// assert_eq!(found.language, Language::Russian);
    /// assert_eq!(found.body, "Я на странице входа");
    /// assert!(StepKeyword::match_line("Итак, начнём").is_none());
    /// ```
    #[must_use]
    pub fn match_line(line: &str) -> Option<KeywordMatch<'_>> {
        let caps = STEP_LINE.captures(line)?;
        let (keyword, language) = Self::from_literal(caps.get(1)?.as_str())?;
        let body = caps.get(2).map_or("", |m| m.as_str());
        Some(KeywordMatch {
            keyword,
            language,
            body,
        })
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|keyword| {
                keyword
                    .literals()
                    .iter()
                    .any(|literal| literal.to_lowercase() == wanted)
            })
            .ok_or_else(|| StepKeywordParseError::Keyword(value.trim().to_owned()))
    }
}

/// A step line split into its keyword and the text after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch<'a> {
    /// Semantic role of the keyword literal.
    pub keyword: StepKeyword,
    /// Language the literal was written in.
    pub language: Language,
    /// Step text with the keyword and surrounding whitespace removed.
    pub body: &'a str,
}

static STEP_LINE: LazyLock<Regex> = LazyLock::new(build_step_line_regex);

#[expect(
    clippy::expect_used,
    reason = "the pattern is assembled from constant keyword literals"
)]
fn build_step_line_regex() -> Regex {
    let alternation = StepKeyword::ALL
        .iter()
        .flat_map(StepKeyword::literals)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"^\s*({alternation})(?:\s+(.*?))?\s*$"))
        .expect("keyword alternation should compile")
}

/// Strip the leading step keyword from `line`.
///
/// Returns the trimmed remainder, or `None` when the line is not a step line.
///
/// ```
/// use bdd_forge_patterns::strip_step_keyword;
/// assert_eq!(strip_step_keyword("  Then the window opens "), Some("the window opens"));
/// assert_eq!(strip_step_keyword("Scenario: login"), None);
/// ```
#[must_use]
pub fn strip_step_keyword(line: &str) -> Option<&str> {
    StepKeyword::match_line(line).map(|found| found.body)
}
