//! Feature-file loading and the strict validation pass.

use std::path::Path;

use gherkin::GherkinEnv;
use tracing::debug;

use crate::error::{Error, Result};

/// Read a feature file into memory.
///
/// Existence is checked before the file is opened, so a missing file is
/// reported as [`Error::NotFound`] rather than as an I/O failure.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when `path` does not exist and [`Error::Io`]
/// when it exists but cannot be read.
pub fn load_feature(path: &Path) -> Result<String> {
    match path.try_exists() {
        Ok(true) => {}
        Ok(false) => {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => return Err(Error::io(path, source)),
    }
    let text = std::fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
    debug!(path = %path.display(), bytes = text.len(), "loaded feature file");
    Ok(text)
}

/// Check `text` with the conforming Gherkin parser.
///
/// This is the opt-in strict counterpart to [`parse`](crate::parse): it honours
/// the `# language:` pragma and rejects anything the Gherkin grammar rejects.
/// A trailing newline is appended when missing, matching what the grammar
/// expects.
///
/// # Errors
///
/// Returns [`Error::Gherkin`] describing the first syntax error.
pub fn validate_strict(text: &str) -> Result<()> {
    let mut normalised = text.to_owned();
    if !normalised.ends_with('\n') {
        normalised.push('\n');
    }
    gherkin::Feature::parse(normalised.as_str(), GherkinEnv::default())?;
    Ok(())
}
