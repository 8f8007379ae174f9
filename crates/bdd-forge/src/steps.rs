//! Distinct step extraction and placeholder stub generation.

use std::fmt::Write as _;
use std::path::Path;

use bdd_forge_patterns::{strip_step_keyword, stub_ident};
use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Distinct step bodies in first-seen order.
///
/// Bodies are keyed by their exact text after the keyword and surrounding
/// whitespace have been removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepSet(IndexSet<String>);

impl StepSet {
    /// Insert a body, returning `false` when it was already present.
    pub fn insert(&mut self, body: &str) -> bool {
        if self.0.contains(body) {
            return false;
        }
        self.0.insert(body.to_owned())
    }

    /// Whether `body` has been collected.
    #[must_use]
    pub fn contains(&self, body: &str) -> bool {
        self.0.contains(body)
    }

    /// Number of distinct bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no step was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate bodies in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    /// Copy the bodies into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<'a> FromIterator<&'a str> for StepSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::default();
        for body in iter {
            set.insert(body);
        }
        set
    }
}

/// Collect the distinct step bodies of a feature file.
///
/// Every line is scanned independently of scenario structure. Lines whose
/// body is empty after the keyword contribute nothing.
///
/// ```
/// let steps = bdd_forge::extract_steps("Given a\nAnd a\nThen b\n");
/// assert_eq!(steps.to_vec(), ["a", "b"]);
/// ```
#[must_use]
pub fn extract_steps(text: &str) -> StepSet {
    let steps: StepSet = text
        .lines()
        .filter_map(strip_step_keyword)
        .filter(|body| !body.is_empty())
        .collect();
    debug!(count = steps.len(), "extracted distinct steps");
    steps
}

/// Render one placeholder procedure per step, in set order.
///
/// Procedures are named with [`stub_ident`]; bodies that derive the same name
/// still get their own block.
#[must_use]
pub fn render_stubs(steps: &StepSet) -> String {
    let mut out = String::new();
    for (index, body) in steps.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "// {body}");
        let _ = writeln!(out, "Процедура {}() Экспорт", stub_ident(body));
        out.push_str("\tВызватьИсключение \"Не реализовано\";\n");
        out.push_str("КонецПроцедуры\n");
    }
    out
}

/// Persist rendered stubs to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::Io`] with the path and cause when the write fails.
pub fn write_stubs(path: &Path, stubs: &str) -> Result<()> {
    std::fs::write(path, stubs).map_err(|source| Error::io(path, source))?;
    info!(path = %path.display(), bytes = stubs.len(), "wrote step stubs");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LOGIN: &str = concat!(
        "Функционал: Тест\n",
        "Сценарий: Вход\n",
        "  Дано Я на странице входа\n",
        "  Когда Я ввожу текст \"qa\" в поле \"Имя\"\n",
        "  Тогда окно открылось\n",
    );

    #[test]
    fn extracts_bodies_without_keywords() {
        assert_eq!(
            extract_steps(LOGIN).to_vec(),
            [
                "Я на странице входа",
                "Я ввожу текст \"qa\" в поле \"Имя\"",
                "окно открылось",
            ]
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        assert_eq!(extract_steps(LOGIN), extract_steps(LOGIN));
    }

    #[test]
    fn deduplicates_across_keywords_and_languages() {
        let text = concat!(
            "Given a user\n",
            "  And a user  \n",
            "Дано a user\n",
            "Then done\n",
            "Тогда done\n",
            "When\n",
        );
        assert_eq!(extract_steps(text).to_vec(), ["a user", "done"]);
    }

    #[test]
    fn stubs_follow_first_seen_order() {
        let steps: StepSet = ["окно открылось", "Окно открылось!"].into_iter().collect();
        let stubs = render_stubs(&steps);
        assert_eq!(
            stubs,
            concat!(
                "// окно открылось\n",
                "Процедура окно_открылось() Экспорт\n",
                "\tВызватьИсключение \"Не реализовано\";\n",
                "КонецПроцедуры\n",
                "\n",
                "// Окно открылось!\n",
                "Процедура окно_открылось() Экспорт\n",
                "\tВызватьИсключение \"Не реализовано\";\n",
                "КонецПроцедуры\n",
            )
        );
    }

    #[test]
    fn empty_set_renders_nothing() {
        assert_eq!(render_stubs(&StepSet::default()), "");
    }

    #[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
    #[test]
    fn writes_stubs_to_disk() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("steps.bsl");
        let stubs = render_stubs(&extract_steps(LOGIN));
        write_stubs(&path, &stubs).expect("write stubs");
        let written = std::fs::read_to_string(&path).expect("read back stubs");
        assert_eq!(written, stubs);
    }

    #[expect(clippy::expect_used, reason = "tests use explicit failures for clarity")]
    #[test]
    fn surfaces_write_failures() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing").join("steps.bsl");
        let err = write_stubs(&path, "x").expect_err("parent directory is absent");
        assert!(matches!(err, Error::Io { path: ref p, .. } if *p == path));
    }
}
