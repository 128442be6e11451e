use chrono::{Datelike, NaiveDate};

/// Coarse calendar-year age: `(death ?? today).year - birth.year`.
///
/// This is year subtraction, not elapsed time: a December birth "ages" at
/// the same new year as a January one. The coarseness matches what the
/// member cards have always displayed and must not be refined to day
/// precision, which would change rendered values.
pub(super) fn coarse_age(
    birth: Option<NaiveDate>,
    death: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<i32> {
    let birth = birth?;
    let end = death.unwrap_or(today);
    Some(end.year() - birth.year())
}
