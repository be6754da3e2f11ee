//! Month-End Calendar Sequences
//!
//! The demo time series is monthly with a month-end convention: each point
//! sits on the last calendar day of its month.

use chrono::{Datelike, NaiveDate};

/// Last calendar day of the given month, or `None` for an out-of-range month.
pub fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Generate `periods` strictly increasing month-end dates.
///
/// The first date is the month end of `start`'s month (so a start already on
/// a month end is kept as-is); each subsequent date advances one calendar
/// month.
pub fn month_end_sequence(start: NaiveDate, periods: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(periods);
    let mut year = start.year();
    let mut month = start.month();

    for _ in 0..periods {
        if let Some(date) = month_end(year, month) {
            dates.push(date);
        }
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    dates
}
