//! # classmark
//!
//! Grades a cohort of students from exam and coursework marks, writes the
//! results sorted by overall mark, and summarises how the grades are
//! distributed.
//!
//! The grading core ([`grade`]) is pure; reading the marks file ([`input`])
//! and producing the report ([`report`]) happen at the edges of [`run`].

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Options for a grading run
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Weighting, classification, sorting and aggregation of marks
pub mod grade;
/// Reading marks files and asking for their names
pub mod input;
/// For all parsers used
pub mod parsers;
/// Results table and distribution summary output
pub mod report;
/// Data model shared by every stage
pub mod types;

use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use config::RunOptions;
use grade::{DistributionSummary, analyze, process};
use input::{FileNamePrompt, Marksheet, read_with_prompt};
use types::StudentResult;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Marks file that was graded.
    pub input:   PathBuf,
    /// Results, sorted by overall mark.
    pub results: Vec<StudentResult>,
    /// Grade distribution of `results`.
    pub summary: DistributionSummary,
}

/// Reads a marks file, grades it, writes the report and prints the summary
/// to `out`.
///
/// The file named in `options` is used when present; otherwise `prompt` is
/// asked for one. The summary is printed even when the report cannot be
/// written, after which the write error is returned.
pub fn run(
    options: &RunOptions,
    prompt: &mut impl FileNamePrompt,
    out: &mut impl Write,
) -> Result<RunOutcome> {
    let (input, marksheet) = match &options.input {
        Some(path) => {
            let marksheet = Marksheet::load(path)
                .with_context(|| format!("Failed to load marks from {}", path.display()))?;
            (path.clone(), marksheet)
        }
        None => read_with_prompt(prompt, options.attempts).context("Failed to load marks")?,
    };

    let results = process(&marksheet.records, marksheet.weight)
        .with_context(|| format!("Failed to grade {}", input.display()))?;
    let summary = analyze(&results);
    tracing::debug!(
        "{} first, {} second, {} third, {} failed",
        summary.first,
        summary.second,
        summary.third,
        summary.failed
    );

    let written = report::write_report(&options.output, &results, marksheet.weight);

    let rendered = if options.json {
        report::render_summary_json(&summary)? + "\n"
    } else {
        report::render_summary(&summary)
    };
    out.write_all(rendered.as_bytes())
        .context("Failed to print the grade summary")?;

    written?;

    Ok(RunOutcome {
        input,
        results,
        summary,
    })
}
