//! Helpers for rendering command output.

use std::io::Write;

use bdd_forge::feature::SkippedLine;
use bdd_forge::{FeatureDocument, StepSet};
use eyre::{Context, Result};
use serde::Serialize;

/// Write an indented outline: feature, its scenarios, then their steps.
pub(crate) fn write_outline(writer: &mut dyn Write, features: &[FeatureDocument]) -> Result<()> {
    for feature in features {
        writeln!(
            writer,
            "{} [{}]",
            feature.name(),
            feature.language().code()
        )
        .wrap_err_with(|| format!("failed to write feature '{}'", feature.name()))?;
        for scenario in feature.scenarios() {
            writeln!(writer, "  {}", scenario.name())
                .wrap_err_with(|| format!("failed to write scenario '{}'", scenario.name()))?;
            for step in scenario.classified_steps() {
                writeln!(
                    writer,
                    "    {} ({}) {}",
                    step.keyword.literal(step.language),
                    step.role,
                    step.body
                )
                .wrap_err_with(|| format!("failed to write step '{}'", step.body))?;
            }
        }
    }
    Ok(())
}

pub(crate) fn write_steps(writer: &mut dyn Write, steps: &StepSet) -> Result<()> {
    steps
        .iter()
        .try_for_each(|body| writeln!(writer, "{body}"))
        .wrap_err("failed to write step listing")
}

pub(crate) fn write_skipped(writer: &mut dyn Write, skipped: &[SkippedLine]) -> Result<()> {
    for entry in skipped {
        writeln!(
            writer,
            "line {}: {}: {}",
            entry.line, entry.reason, entry.text
        )
        .wrap_err_with(|| format!("failed to report skipped line {}", entry.line))?;
    }
    Ok(())
}

pub(crate) fn write_text(writer: &mut dyn Write, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .wrap_err("failed to write command output")
}

pub(crate) fn write_lines<I, S>(writer: &mut dyn Write, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .try_for_each(|line| writeln!(writer, "{}", line.as_ref()))
        .wrap_err("failed to write command output")
}

pub(crate) fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).wrap_err("failed to serialize JSON output")?;
    writer
        .write_all(b"\n")
        .wrap_err("failed to terminate JSON output with newline")
}
