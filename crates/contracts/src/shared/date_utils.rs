use chrono::NaiveDateTime;

/// Whole days from `from` to `to`, rounded down.
///
/// A partial day after `from` counts as 0 and any instant before `from` is
/// negative, so a delivery recorded a few hours before purchase gives -1.
pub fn whole_days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_seconds().div_euclid(86_400)
}
