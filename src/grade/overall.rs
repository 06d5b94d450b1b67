use crate::types::CourseworkWeight;

/// Weighted overall mark, unrounded.
///
/// * `exam_mark`: raw exam mark
/// * `coursework_mark`: raw coursework mark
/// * `weight`: coursework share; the exam gets the rest
pub fn compute_overall(exam_mark: f64, coursework_mark: f64, weight: CourseworkWeight) -> f64 {
    coursework_mark * (weight.coursework() / 100.0) + exam_mark * (weight.exam() / 100.0)
}

/// Rounds a mark to the nearest integer, ties to even (`69.5 -> 70`,
/// `68.5 -> 68`).
pub fn round_mark(mark: f64) -> i64 {
    mark.round_ties_even() as i64
}
