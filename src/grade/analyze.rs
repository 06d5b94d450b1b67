use serde::{Deserialize, Serialize};

use crate::types::{Grade, StudentResult};

/// How many students landed in each grade, plus who failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSummary {
    /// Number of firsts.
    pub first:                       usize,
    /// Number of seconds.
    pub second:                      usize,
    /// Number of thirds.
    pub third:                       usize,
    /// Number of failed students.
    pub failed:                      usize,
    /// Registration numbers of failed students, in result order.
    pub failed_registration_numbers: Vec<u64>,
}

impl DistributionSummary {
    /// Count for a single grade.
    pub fn count(&self, grade: Grade) -> usize {
        match grade {
            Grade::First => self.first,
            Grade::Second => self.second,
            Grade::Third => self.third,
            Grade::Failed => self.failed,
        }
    }

    /// Number of students counted.
    pub fn total(&self) -> usize {
        self.first + self.second + self.third + self.failed
    }
}

/// Tallies a result set in one pass.
pub fn analyze(results: &[StudentResult]) -> DistributionSummary {
    let mut summary = DistributionSummary::default();

    for result in results {
        match result.grade {
            Grade::First => summary.first += 1,
            Grade::Second => summary.second += 1,
            Grade::Third => summary.third += 1,
            Grade::Failed => {
                summary.failed += 1;
                summary
                    .failed_registration_numbers
                    .push(result.registration_number);
            }
        }
    }

    summary
}
