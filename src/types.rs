use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tabled::Tabled;
use typed_builder::TypedBuilder;

use crate::grade::GradingError;

/// Raw marks for one student, as read from the input file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct StudentMark {
    /// Unique registration number of the student.
    pub registration_number: u64,
    /// Exam mark, expected in [0, 100].
    pub exam_mark:           f64,
    /// Coursework mark, expected in [0, 100].
    pub coursework_mark:     f64,
}

/// Percentage of the overall mark contributed by coursework. The exam
/// contributes the remainder.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CourseworkWeight(f64);

impl CourseworkWeight {
    /// Validates `percent` and wraps it.
    ///
    /// * `percent`: coursework share of the overall mark, in [0, 100]
    pub fn new(percent: f64) -> Result<Self, GradingError> {
        if percent.is_finite() && (0.0..=100.0).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(GradingError::InvalidWeight(percent))
        }
    }

    /// Coursework share, as a percentage.
    pub fn coursework(self) -> f64 {
        self.0
    }

    /// Exam share, as a percentage.
    pub fn exam(self) -> f64 {
        100.0 - self.0
    }
}

impl TryFrom<f64> for CourseworkWeight {
    type Error = GradingError;

    fn try_from(percent: f64) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl Display for CourseworkWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coursework {}% / exam {}%", self.coursework(), self.exam())
    }
}

/// Degree classification awarded to a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// Overall mark of 70 or more.
    First,
    /// Overall mark between 50 and 69.
    Second,
    /// Overall mark between 40 and 49.
    Third,
    /// Below 40 overall, or below 30 in either component.
    Failed,
}

impl Grade {
    /// Every grade, best first.
    pub const ALL: [Grade; 4] = [Grade::First, Grade::Second, Grade::Third, Grade::Failed];

    /// Lowercase label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Grade::First => "first",
            Grade::Second => "second",
            Grade::Third => "third",
            Grade::Failed => "failed",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rounded marks and grade for one student.
#[derive(Tabled, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentResult {
    /// Registration number copied from the input.
    #[tabled(rename = "Registration")]
    pub registration_number: u64,
    /// Rounded exam mark.
    #[tabled(rename = "Exam")]
    pub exam_mark:           i64,
    /// Rounded coursework mark.
    #[tabled(rename = "Coursework")]
    pub coursework_mark:     i64,
    /// Rounded weighted overall mark; the sort key of a result set.
    #[tabled(rename = "Overall")]
    pub overall_mark:        i64,
    /// Classification derived from the three rounded marks.
    #[tabled(rename = "Grade")]
    pub grade:               Grade,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_accepts_closed_range() {
        assert_eq!(CourseworkWeight::new(0.0).unwrap().exam(), 100.0);
        assert_eq!(CourseworkWeight::new(100.0).unwrap().exam(), 0.0);
        assert_eq!(CourseworkWeight::new(37.5).unwrap().coursework(), 37.5);
    }

    #[test]
    fn weight_rejects_out_of_range_and_nan() {
        for bad in [-0.1, 100.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(CourseworkWeight::new(bad), Err(GradingError::InvalidWeight(_))));
        }
    }

    #[test]
    fn grade_labels_and_serde_agree() {
        for grade in Grade::ALL {
            let json = serde_json::to_string(&grade).unwrap();
            assert_eq!(json, format!("\"{}\"", grade.label()));
            assert_eq!(grade.to_string(), grade.label());
        }
    }
}
