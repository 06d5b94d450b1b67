use crate::{
    constants::{COMPONENT_PASS_MARK, FIRST_CLASS_MARK, SECOND_CLASS_BAND, THIRD_CLASS_BAND},
    types::Grade,
};

/// Classifies a student from their exam, coursework and overall marks.
///
/// | Condition                         | Grade    |
/// |-----------------------------------|----------|
/// | exam < 30 or coursework < 30      | `failed` |
/// | overall >= 70                     | `first`  |
/// | 50 <= overall <= 69               | `second` |
/// | 40 <= overall <= 49               | `third`  |
/// | anything else                     | `failed` |
///
/// Rows are checked top to bottom, so a weak component fails the student
/// whatever their overall mark. Fractional overall marks that land between
/// bands (69.5, say) match no band and fail; callers pass rounded marks.
pub fn classify(exam: f64, coursework: f64, overall: f64) -> Grade {
    let in_band = |(low, high): (f64, f64)| (low..=high).contains(&overall);

    match overall {
        _ if exam < COMPONENT_PASS_MARK || coursework < COMPONENT_PASS_MARK => Grade::Failed,
        o if o >= FIRST_CLASS_MARK => Grade::First,
        _ if in_band(SECOND_CLASS_BAND) => Grade::Second,
        _ if in_band(THIRD_CLASS_BAND) => Grade::Third,
        _ => Grade::Failed,
    }
}
