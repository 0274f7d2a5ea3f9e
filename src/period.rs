//! Calendar-aware period boundaries: week, month, quarter, and year.
//!
//! Week math is calendar-independent (pure day arithmetic); month, quarter,
//! and year boundaries go through the injected [`Calendar`] so non-Gregorian
//! month lengths and leap rules are honored. Boundaries that would leave the
//! calendar's supported span clamp to it.

use crate::calendar::Calendar;
use crate::consts::{DAYS_PER_WEEK, MIN_DAY, MONTHS_PER_QUARTER};
use crate::types::{PlainDate, Weekday};

/// First day at or before `date` that falls on `first_day`.
pub fn start_of_week(date: PlainDate, first_day: Weekday) -> PlainDate {
    let back =
        (i32::from(date.weekday().index()) - i32::from(first_day.index())).rem_euclid(DAYS_PER_WEEK);
    date.add_days(-back)
}

/// Last day of the week containing `date`.
pub fn end_of_week(date: PlainDate, first_day: Weekday) -> PlainDate {
    start_of_week(date, first_day).add_days(DAYS_PER_WEEK - 1)
}

/// First day of the calendar month containing `date`.
pub fn start_of_month(date: PlainDate, calendar: &dyn Calendar) -> PlainDate {
    let fields = calendar.to_fields(date);
    clamped(calendar, fields.year, fields.month, MIN_DAY, false)
}

/// Last day of the calendar month containing `date`.
pub fn end_of_month(date: PlainDate, calendar: &dyn Calendar) -> PlainDate {
    let fields = calendar.to_fields(date);
    let last = calendar.days_in_month(fields.year, fields.month);
    clamped(calendar, fields.year, fields.month, last, true)
}

/// Zero-based quarter index of `date` under the calendar's month numbering.
pub fn quarter_of(date: PlainDate, calendar: &dyn Calendar) -> u8 {
    (calendar.to_fields(date).month - 1) / MONTHS_PER_QUARTER
}

/// First day of the quarter containing `date`.
pub fn start_of_quarter(date: PlainDate, calendar: &dyn Calendar) -> PlainDate {
    let fields = calendar.to_fields(date);
    let start_month = quarter_start_month(quarter_of(date, calendar), calendar, fields.year);
    clamped(calendar, fields.year, start_month, MIN_DAY, false)
}

/// Last day of the quarter containing `date`.
pub fn end_of_quarter(date: PlainDate, calendar: &dyn Calendar) -> PlainDate {
    let fields = calendar.to_fields(date);
    let end_month =
        quarter_start_month(quarter_of(date, calendar), calendar, fields.year) + MONTHS_PER_QUARTER
            - 1;
    let last = calendar.days_in_month(fields.year, end_month);
    clamped(calendar, fields.year, end_month, last, true)
}

/// First day of the calendar year containing `date`.
pub fn start_of_year(date: PlainDate, calendar: &dyn Calendar) -> PlainDate {
    let fields = calendar.to_fields(date);
    clamped(calendar, fields.year, 1, MIN_DAY, false)
}

/// Last day of the calendar year containing `date`.
pub fn end_of_year(date: PlainDate, calendar: &dyn Calendar) -> PlainDate {
    let fields = calendar.to_fields(date);
    let last_month = calendar.months_in_year(fields.year);
    let last = calendar.days_in_month(fields.year, last_month);
    clamped(calendar, fields.year, last_month, last, true)
}

/// First month of a zero-based quarter. A quarter index outside the
/// calendar's month numbering is a caller bug.
pub(crate) fn quarter_start_month(quarter: u8, calendar: &dyn Calendar, year: i32) -> u8 {
    let month = quarter * MONTHS_PER_QUARTER + 1;
    debug_assert!(
        month + MONTHS_PER_QUARTER - 1 <= calendar.months_in_year(year),
        "quarter index out of range"
    );
    month
}

/// Builds a date from fields, clamping to the supported span when the
/// fields fall outside it.
pub(crate) fn clamped(
    calendar: &dyn Calendar,
    year: i32,
    month: u8,
    day: u8,
    toward_max: bool,
) -> PlainDate {
    calendar.from_fields(year, month, day).unwrap_or_else(|_| {
        if toward_max {
            calendar.max_supported()
        } else {
            calendar.min_supported()
        }
    })
}
