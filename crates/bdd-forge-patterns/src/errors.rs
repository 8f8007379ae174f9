//! Error types shared by the keyword parsing modules.

use thiserror::Error;

/// Error returned when parsing a [`StepKeyword`](crate::StepKeyword) or a
/// [`Language`](crate::Language) from a string fails.
///
/// Contains the unrecognised text for diagnostic purposes.
///
/// # Examples
/// ```
/// use bdd_forge_patterns::StepKeyword;
/// let err = "Whenever".parse::<StepKeyword>().unwrap_err();
/// assert_eq!(err.to_string(), "invalid step keyword: Whenever");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepKeywordParseError {
    /// The text is not one of the ten keyword literals.
    #[error("invalid step keyword: {0}")]
    Keyword(String),
    /// The text is not a supported language code.
    #[error("unsupported language: {0}")]
    Language(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_keyword_error() {
        let err = StepKeywordParseError::Keyword("Maybe".into());
        assert_eq!(err.to_string(), "invalid step keyword: Maybe");
    }

    #[test]
    fn formats_language_error() {
        let err = StepKeywordParseError::Language("fr".into());
        assert_eq!(err.to_string(), "unsupported language: fr");
    }
}
