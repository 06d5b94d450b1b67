#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Distribution counts over a processed result set.
pub mod analyze;
/// Grade classification rules.
pub mod classify;
/// Weighted overall mark and rounding policy.
pub mod overall;
/// Turns raw marks into a sorted set of results.
pub mod process;

pub use analyze::{DistributionSummary, analyze};
pub use classify::classify;
pub use overall::{compute_overall, round_mark};
pub use process::process;

pub use crate::types::{CourseworkWeight, Grade, StudentMark, StudentResult};

/// An enum to represent possible errors while grading a batch of students.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GradingError {
    /// Coursework weight outside [0, 100].
    #[error("Coursework weight must be a percentage between 0 and 100, got {0}")]
    InvalidWeight(f64),
    /// A student record that cannot be graded. Nothing from the batch is
    /// returned.
    #[error("Invalid record #{index} (registration number {registration_number}): {reason}")]
    InvalidRecord {
        /// Zero-based position of the record in the batch.
        index:               usize,
        /// Registration number of the offending record.
        registration_number: u64,
        /// What is wrong with it.
        reason:              String,
    },
}
