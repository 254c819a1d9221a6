//! Coverage end-date calculation
//!
//! Standard warranties run a plain number of calendar days. Premium warranties
//! count days one at a time starting on the request date, skipping Mondays in
//! the count (the date still moves past them). Sundays do count; only when the
//! walk stops on a Sunday is the end pushed to the Monday after.

use chrono::{Datelike, NaiveDate, Weekday};

use core_kernel::{add_calendar_days, next_day, TemporalError};

/// Day that does not count toward a premium term
pub const UNCOUNTED_WEEKDAY: Weekday = Weekday::Mon;

/// An end date landing on this day moves forward by one
pub const PUSHED_WEEKDAY: Weekday = Weekday::Sun;

/// End date of a premium warranty of `term_days` counted days
pub fn premium_end_date(start: NaiveDate, term_days: u32) -> Result<NaiveDate, TemporalError> {
    let mut date = start;
    let mut counted = 0;

    while counted < term_days {
        if date.weekday() != UNCOUNTED_WEEKDAY {
            counted += 1;
        }
        date = next_day(date)?;
    }

    if date.weekday() == PUSHED_WEEKDAY {
        date = next_day(date)?;
    }

    Ok(date)
}

/// End date of a standard warranty of `term_days` calendar days
pub fn standard_end_date(start: NaiveDate, term_days: u32) -> Result<NaiveDate, TemporalError> {
    add_calendar_days(start, u64::from(term_days))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn premium_end_is_after_start_and_never_sunday(
            offset in 0i64..20_000i64,
            term in 1u32..400u32,
        ) {
            let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(offset);
            let end = premium_end_date(start, term).unwrap();

            prop_assert!(end > start);
            prop_assert_ne!(end.weekday(), Weekday::Sun);
        }

        #[test]
        fn premium_counts_every_day_but_monday(
            offset in 0i64..20_000i64,
            term in 1u32..400u32,
        ) {
            let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(offset);
            let end = premium_end_date(start, term).unwrap();

            let counted_before = |limit: NaiveDate| {
                start
                    .iter_days()
                    .take_while(|d| *d < limit)
                    .filter(|d| d.weekday() != UNCOUNTED_WEEKDAY)
                    .count() as u32
            };
            let pushed = end.pred_opt().filter(|d| d.weekday() == PUSHED_WEEKDAY);
            let walk_stopped_on_sunday = pushed.map_or(false, |sunday| counted_before(sunday) == term);

            prop_assert!(counted_before(end) == term || walk_stopped_on_sunday);
        }
    }
}
