//! Line classification for line-oriented Gherkin scanning.

use crate::keyword::{KeywordMatch, Language, StepKeyword};

/// Kind of a single feature-file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// `#` comment, including the `# language:` pragma.
    Comment,
    /// `@tag` line.
    Tag,
    /// `Feature:` / `Функционал:` header.
    Feature {
        /// Text after the colon, trimmed.
        name: &'a str,
        /// Language of the header literal.
        language: Language,
    },
    /// `Scenario:` / `Сценарий:` header.
    Scenario {
        /// Text after the colon, trimmed.
        name: &'a str,
        /// Language of the header literal.
        language: Language,
    },
    /// A line opening with one of the ten step keyword literals.
    Step(KeywordMatch<'a>),
    /// Anything else: descriptions, tables, doc strings, unknown headers.
    Other(&'a str),
}

/// Classify one line of feature text.
///
/// The line is trimmed first. Headers are checked before step keywords, and
/// every check is a prefix match on the trimmed line.
///
/// ```
/// use bdd_forge_patterns::{Language, LineKind, classify_line};
///
/// assert_eq!(
///     classify_line("Функционал: Тест"),
///     LineKind::Feature { name: "Тест", language: Language::Russian },
/// );
/// assert_eq!(classify_line("   "), LineKind::Blank);
/// ```
#[must_use]
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with('#') {
        return LineKind::Comment;
    }
    if trimmed.starts_with('@') {
        return LineKind::Tag;
    }
    for language in Language::ALL {
        if let Some(rest) = trimmed.strip_prefix(language.feature_header()) {
            return LineKind::Feature {
                name: rest.trim(),
                language,
            };
        }
        if let Some(rest) = trimmed.strip_prefix(language.scenario_header()) {
            return LineKind::Scenario {
                name: rest.trim(),
                language,
            };
        }
    }
    StepKeyword::match_line(trimmed).map_or(LineKind::Other(trimmed), LineKind::Step)
}
