#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use typed_builder::TypedBuilder;

use crate::constants::{DEFAULT_PROMPT_ATTEMPTS, OUTPUT_FILE};

/// How a single grading run reads, writes and reports.
///
/// The grading rules themselves are not configurable; the coursework weight
/// comes from the marks file.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
#[builder(doc)]
pub struct RunOptions {
    /// Marks file to read. When absent the user is prompted for one.
    #[builder(default, setter(strip_option, into))]
    pub input:    Option<PathBuf>,
    /// Where the results table is written.
    #[builder(default = PathBuf::from(OUTPUT_FILE), setter(into))]
    pub output:   PathBuf,
    /// How many file names the user may enter before giving up.
    #[builder(default = DEFAULT_PROMPT_ATTEMPTS)]
    pub attempts: usize,
    /// Print the summary as JSON instead of prose.
    #[builder(default)]
    pub json:     bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
