//! Date and time utility functions
//!
//! This module provides the platform renderings of a field value, the merge
//! rule applied when the dialog yields a selection, and the calendar
//! arithmetic the dialog needs.

use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, Timelike};

use crate::constants::{PLATFORM_DATE_FORMAT, PLATFORM_TIME_FORMAT};
use crate::picker::SubMode;

/// Current local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Platform date-string rendering (e.g. "Fri Mar 15 2024")
pub fn to_date_string(value: &NaiveDateTime) -> String {
    value.format(PLATFORM_DATE_FORMAT).to_string()
}

/// Platform time-string rendering (e.g. "10:30:00")
pub fn to_time_string(value: &NaiveDateTime) -> String {
    value.format(PLATFORM_TIME_FORMAT).to_string()
}

/// Platform rendering of the whole instant
pub fn to_datetime_string(value: &NaiveDateTime) -> String {
    format!("{} {}", to_date_string(value), to_time_string(value))
}

/// Merge a dialog selection into an existing value.
///
/// Only the components relevant to `sub_mode` are taken from `selection`:
/// year/month/day for [`SubMode::Date`], hour/minute for [`SubMode::Time`].
/// Everything else (including seconds) comes from `base`, or from `fallback`
/// when the field has no value yet.
///
/// # Arguments
/// * `base` - The current field value, if any
/// * `selection` - What the dialog returned
/// * `sub_mode` - Which half of the value the dialog was editing
/// * `fallback` - The instant to start from when `base` is unset
pub fn merge_selection(
    base: Option<NaiveDateTime>,
    selection: NaiveDateTime,
    sub_mode: SubMode,
    fallback: NaiveDateTime,
) -> NaiveDateTime {
    let base = base.unwrap_or(fallback);
    match sub_mode {
        SubMode::Date => NaiveDateTime::new(selection.date(), base.time()),
        SubMode::Time => {
            let time = base
                .time()
                .with_hour(selection.hour())
                .and_then(|t| t.with_minute(selection.minute()))
                .unwrap_or_else(|| selection.time());
            NaiveDateTime::new(base.date(), time)
        }
    }
}

/// Clamp a value into optional inclusive bounds
pub fn clamp_to_bounds(
    value: NaiveDateTime,
    minimum: Option<NaiveDateTime>,
    maximum: Option<NaiveDateTime>,
) -> NaiveDateTime {
    let value = match minimum {
        Some(min) if value < min => min,
        _ => value,
    };
    match maximum {
        Some(max) if value > max => max,
        _ => value,
    }
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// Shift a date-time by whole months, clamping the day to the target month
pub fn add_months(value: NaiveDateTime, months: i32) -> NaiveDateTime {
    let shifted = if months >= 0 {
        value.checked_add_months(Months::new(months as u32))
    } else {
        value.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(value)
}

/// Shift a date-time by whole days
pub fn add_days(value: NaiveDateTime, days: i64) -> NaiveDateTime {
    value.checked_add_signed(Duration::days(days)).unwrap_or(value)
}

/// Rows of a month grid, Monday first, `None` for padding cells
pub fn month_grid(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let first = date.with_day(1).unwrap_or(date);
    let offset = first.weekday().num_days_from_monday() as usize;
    let last = days_in_month(first);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut column = offset;
    for day in 1..=last {
        week[column] = Some(day);
        column += 1;
        if column == 7 {
            weeks.push(week);
            week = [None; 7];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_time_merge_keeps_seconds() {
        let base = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 30, 45).unwrap();
        let merged = merge_selection(Some(base), at(1999, 1, 1, 7, 5), SubMode::Time, at(2000, 1, 1, 0, 0));
        assert_eq!(merged, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(7, 5, 45).unwrap());
    }

    #[test]
    fn test_merge_without_base_uses_fallback() {
        let merged = merge_selection(None, at(2024, 4, 1, 0, 0), SubMode::Date, at(2030, 6, 6, 18, 15));
        assert_eq!(merged, at(2024, 4, 1, 18, 15));
    }

    #[test]
    fn test_days_in_month_leap_year() {
        assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()), 29);
        assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2023, 2, 10).unwrap()), 28);
        assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()), 31);
    }

    #[test]
    fn test_month_grid_starts_on_monday() {
        // March 2024 starts on a Friday
        let grid = month_grid(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(grid[0], [None, None, None, None, Some(1), Some(2), Some(3)]);
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[4][6], Some(31));
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(add_months(at(2024, 1, 31, 9, 0), 1), at(2024, 2, 29, 9, 0));
        assert_eq!(add_months(at(2024, 3, 31, 9, 0), -1), at(2024, 2, 29, 9, 0));
    }
}
