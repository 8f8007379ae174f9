//! Identifier utilities for generated step stubs.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"[^\w\s]"));
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

#[expect(clippy::expect_used, reason = "patterns are compile-time constants")]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("identifier pattern should compile")
}

/// Derive a stub procedure name from a step body.
///
/// The body is lower-cased, every character that is neither a word character
/// nor whitespace is removed, and each whitespace run becomes a single
/// underscore. Word characters are Unicode-aware, so Cyrillic text survives.
/// Names that would start with a digit, or would be empty, gain a leading
/// underscore. Distinct bodies may map to the same name.
///
/// # Examples
///
/// ```
/// use bdd_forge_patterns::stub_ident;
/// assert_eq!(stub_ident("Я на странице входа"), "я_на_странице_входа");
/// assert_eq!(stub_ident("the total is \"5\"!"), "the_total_is_5");
/// ```
#[must_use]
pub fn stub_ident(body: &str) -> String {
    let lowered = body.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let mut ident = WHITESPACE_RUN
        .replace_all(stripped.trim(), "_")
        .into_owned();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::stub_ident;
    use rstest::rstest;

    #[rstest]
    #[case("Я на странице входа", "я_на_странице_входа")]
    #[case(
        "Я ввожу текст \"qa\" в поле \"Имя\"",
        "я_ввожу_текст_qa_в_поле_имя"
    )]
    #[case("Hello   world!", "hello_world")]
    #[case("snake_case stays", "snake_case_stays")]
    #[case("a - b", "a_b")]
    #[case("42 items", "_42_items")]
    #[case("!!!", "_")]
    fn derives_identifiers(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(stub_ident(body), expected);
    }

    #[test]
    fn colliding_bodies_share_a_name() {
        assert_eq!(stub_ident("окно открылось"), stub_ident("Окно открылось!"));
    }
}
