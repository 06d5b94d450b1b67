#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use colored::Colorize;
use itertools::Itertools;
use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{
    grade::DistributionSummary,
    types::{CourseworkWeight, StudentResult},
};

/// An enum to represent possible errors while producing a report
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// The report file could not be written.
    #[error("Could not write report to {}", path.display())]
    Write {
        /// Destination of the report.
        path:   PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The summary could not be serialized.
    #[error("Could not serialize the grade summary")]
    Json(#[from] serde_json::Error),
}

/// Renders the sorted results as a table, one row per student.
pub fn render_table(results: &[StudentResult], weight: CourseworkWeight) -> String {
    Table::new(results)
        .with(Panel::header("Cohort Results"))
        .with(Panel::footer(format!("{} students, {weight}", results.len())))
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Writes the results table to `path`, replacing any previous report.
pub fn write_report(
    path: impl AsRef<Path>,
    results: &[StudentResult],
    weight: CourseworkWeight,
) -> Result<(), ReportError> {
    let path = path.as_ref();
    let mut table = render_table(results, weight);
    table.push('\n');

    std::fs::write(path, table).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote {} results to {}", results.len(), path.display());

    Ok(())
}

/// Human readable distribution summary, one fact per line.
pub fn render_summary(summary: &DistributionSummary) -> String {
    let failed_list = format!("[{}]", summary.failed_registration_numbers.iter().join(", "));
    let failed_list = if summary.failed > 0 {
        failed_list.red().to_string()
    } else {
        failed_list
    };

    let mut out = String::new();
    let _ = writeln!(out, "Number of students who have first-class marks : {}", summary.first);
    let _ = writeln!(out, "Number of students who have second-class marks : {}", summary.second);
    let _ = writeln!(out, "Number of students who have third-class marks : {}", summary.third);
    let _ = writeln!(out, "Number of students who have failed : {}", summary.failed);
    let _ = writeln!(out, "Students who have failed : {failed_list}");
    out
}

/// Distribution summary as pretty-printed JSON.
pub fn render_summary_json(summary: &DistributionSummary) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(summary)?)
}
