use std::collections::HashSet;

use super::{GradingError, classify, compute_overall, round_mark};
use crate::{
    constants::MAX_EXPECTED_MARK,
    types::{CourseworkWeight, StudentMark, StudentResult},
};

/// Checks that a record can be graded.
fn validate(index: usize, record: &StudentMark) -> Result<(), GradingError> {
    let invalid = |reason: String| GradingError::InvalidRecord {
        index,
        registration_number: record.registration_number,
        reason,
    };

    for (name, mark) in [("exam", record.exam_mark), ("coursework", record.coursework_mark)] {
        if !mark.is_finite() {
            return Err(invalid(format!("{name} mark is not a number ({mark})")));
        }
        if mark < 0.0 {
            return Err(invalid(format!("{name} mark is negative ({mark})")));
        }
        if mark > MAX_EXPECTED_MARK {
            tracing::warn!(
                "Student {} has a {name} mark of {mark}, above {MAX_EXPECTED_MARK}",
                record.registration_number
            );
        }
    }

    Ok(())
}

/// Grades one validated record.
fn grade_record(record: &StudentMark, weight: CourseworkWeight) -> StudentResult {
    let overall = compute_overall(record.exam_mark, record.coursework_mark, weight);

    let exam_mark = round_mark(record.exam_mark);
    let coursework_mark = round_mark(record.coursework_mark);
    let overall_mark = round_mark(overall);

    StudentResult {
        registration_number: record.registration_number,
        exam_mark,
        coursework_mark,
        overall_mark,
        grade: classify(exam_mark as f64, coursework_mark as f64, overall_mark as f64),
    }
}

/// Grades every record and returns the results sorted by overall mark,
/// lowest first. Students with equal overall marks keep their input order.
///
/// The overall mark is computed from the raw marks; exam, coursework and
/// overall are then rounded independently and the grade is decided on the
/// rounded values.
///
/// Fails on the first record with a negative or non-finite mark, or with a
/// registration number already seen, without returning partial results.
pub fn process(
    records: &[StudentMark],
    weight: CourseworkWeight,
) -> Result<Vec<StudentResult>, GradingError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut results = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        validate(index, record)?;
        if !seen.insert(record.registration_number) {
            return Err(GradingError::InvalidRecord {
                index,
                registration_number: record.registration_number,
                reason: "duplicate registration number".into(),
            });
        }
        results.push(grade_record(record, weight));
    }

    results.sort_by_key(|r| r.overall_mark);
    tracing::debug!("Graded {} students ({weight})", results.len());

    Ok(results)
}
