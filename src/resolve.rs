//! Resolves range shortcuts to concrete date ranges.
//!
//! All arithmetic is relative to the supplied `today` and goes through the
//! injected [`Calendar`], so month and quarter shortcuts honor
//! non-Gregorian month lengths. Every resolved endpoint is clamped to the
//! calendar's supported span.

use crate::calendar::Calendar;
use crate::consts::{BUSINESS_DAYS_PER_WEEK, DAYS_PER_WEEK};
use crate::period::{
    end_of_month, end_of_quarter, end_of_year, start_of_month, start_of_quarter, start_of_week,
    start_of_year,
};
use crate::range::DateRange;
use crate::shortcut::RangeShortcut;
use crate::types::{PlainDate, Weekday};

/// Resolves a shortcut as of `today`. Returns `None` only for
/// [`RangeShortcut::Custom`], which has no predefined range.
///
/// `future_only` shifts the start of `ThisWeek` and `ThisMonth` to today,
/// so those shortcuts stay selectable under a future-only constraint.
pub fn resolve(
    shortcut: RangeShortcut,
    today: PlainDate,
    calendar: &dyn Calendar,
    first_day: Weekday,
    future_only: bool,
) -> Option<DateRange> {
    let range = match shortcut {
        RangeShortcut::Today => span(calendar, today, today),
        RangeShortcut::Yesterday => {
            let yesterday = today.add_days(-1);
            span(calendar, yesterday, yesterday)
        }
        RangeShortcut::Last7Days => trailing(calendar, today, 7),
        RangeShortcut::Last14Days => trailing(calendar, today, 14),
        RangeShortcut::Last30Days => trailing(calendar, today, 30),
        RangeShortcut::Last60Days => trailing(calendar, today, 60),
        RangeShortcut::Last90Days => trailing(calendar, today, 90),
        RangeShortcut::LastWeek => {
            let start_of_this_week = start_of_week(today, first_day);
            span(
                calendar,
                start_of_this_week.add_days(-DAYS_PER_WEEK),
                start_of_this_week.add_days(-1),
            )
        }
        RangeShortcut::LastMonth => {
            let first_of_this_month = start_of_month(today, calendar);
            let last_of_last_month = calendar.clamp(first_of_this_month.add_days(-1));
            span(
                calendar,
                start_of_month(last_of_last_month, calendar),
                last_of_last_month,
            )
        }
        RangeShortcut::LastQuarter => {
            let in_last_quarter = calendar.clamp(start_of_quarter(today, calendar).add_days(-1));
            span(
                calendar,
                start_of_quarter(in_last_quarter, calendar),
                end_of_quarter(in_last_quarter, calendar),
            )
        }
        RangeShortcut::LastYear => {
            let in_last_year = calendar.clamp(start_of_year(today, calendar).add_days(-1));
            span(
                calendar,
                start_of_year(in_last_year, calendar),
                end_of_year(in_last_year, calendar),
            )
        }
        RangeShortcut::WeekToDate => span(calendar, start_of_week(today, first_day), today),
        RangeShortcut::MonthToDate => span(calendar, start_of_month(today, calendar), today),
        RangeShortcut::QuarterToDate => span(calendar, start_of_quarter(today, calendar), today),
        RangeShortcut::YearToDate => span(calendar, start_of_year(today, calendar), today),
        RangeShortcut::Rolling7Days => rolling(calendar, today, 7),
        RangeShortcut::Rolling30Days => rolling(calendar, today, 30),
        RangeShortcut::Rolling90Days => rolling(calendar, today, 90),
        RangeShortcut::ThisWeek => {
            let start_of_this_week = start_of_week(today, first_day);
            let start = if future_only { today } else { start_of_this_week };
            span(
                calendar,
                start,
                start_of_this_week.add_days(DAYS_PER_WEEK - 1),
            )
        }
        RangeShortcut::ThisMonth => {
            let start = if future_only {
                today
            } else {
                start_of_month(today, calendar)
            };
            span(calendar, start, end_of_month(today, calendar))
        }
        RangeShortcut::ThisQuarter => span(
            calendar,
            start_of_quarter(today, calendar),
            end_of_quarter(today, calendar),
        ),
        RangeShortcut::ThisYear => span(
            calendar,
            start_of_year(today, calendar),
            end_of_year(today, calendar),
        ),
        RangeShortcut::Next1Day => leading(calendar, today, 1),
        RangeShortcut::Next2Days => leading(calendar, today, 2),
        RangeShortcut::Next3Days => leading(calendar, today, 3),
        RangeShortcut::Next7Days => leading(calendar, today, 7),
        RangeShortcut::Next14Days => leading(calendar, today, 14),
        RangeShortcut::Next30Days => leading(calendar, today, 30),
        RangeShortcut::Next90Days => leading(calendar, today, 90),
        RangeShortcut::NextWeek => {
            let start_of_next_week = start_of_week(today, first_day).add_days(DAYS_PER_WEEK);
            span(
                calendar,
                start_of_next_week,
                start_of_next_week.add_days(DAYS_PER_WEEK - 1),
            )
        }
        RangeShortcut::NextMonth => {
            let first_of_next_month = calendar.clamp(end_of_month(today, calendar).add_days(1));
            span(
                calendar,
                first_of_next_month,
                end_of_month(first_of_next_month, calendar),
            )
        }
        RangeShortcut::NextQuarter => {
            let in_next_quarter = calendar.clamp(end_of_quarter(today, calendar).add_days(1));
            span(
                calendar,
                start_of_quarter(in_next_quarter, calendar),
                end_of_quarter(in_next_quarter, calendar),
            )
        }
        RangeShortcut::NextYear => {
            let in_next_year = calendar.clamp(end_of_year(today, calendar).add_days(1));
            span(
                calendar,
                start_of_year(in_next_year, calendar),
                end_of_year(in_next_year, calendar),
            )
        }
        RangeShortcut::PreviousBusinessWeek => {
            let mut start = start_of_week(today, first_day).add_days(-DAYS_PER_WEEK);
            // first Monday of the previous week, whatever the week start
            while start.weekday() != Weekday::Monday {
                start = start.add_days(1);
            }
            span(calendar, start, start.add_days(BUSINESS_DAYS_PER_WEEK - 1))
        }
        RangeShortcut::PreviousBusinessMonth => {
            let first_of_this_month = start_of_month(today, calendar);
            let last_of_last_month = calendar.clamp(first_of_this_month.add_days(-1));
            span(
                calendar,
                start_of_month(last_of_last_month, calendar),
                last_of_last_month,
            )
        }
        RangeShortcut::AllTime => {
            DateRange::complete(calendar.min_supported(), calendar.max_supported())
        }
        RangeShortcut::Custom => return None,
    };
    Some(range)
}

fn span(calendar: &dyn Calendar, start: PlainDate, end: PlainDate) -> DateRange {
    DateRange::complete(calendar.clamp(start), calendar.clamp(end))
}

/// The last `days` days, ending today.
fn trailing(calendar: &dyn Calendar, today: PlainDate, days: i32) -> DateRange {
    span(calendar, today.add_days(-(days - 1)), today)
}

/// From `days` days ago through today, spanning `days + 1` dates.
fn rolling(calendar: &dyn Calendar, today: PlainDate, days: i32) -> DateRange {
    span(calendar, today.add_days(-days), today)
}

/// From today through `days` days ahead.
fn leading(calendar: &dyn Calendar, today: PlainDate, days: i32) -> DateRange {
    span(calendar, today, today.add_days(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Gregorian, Persian};

    fn date(year: i32, month: u8, day: u8) -> PlainDate {
        PlainDate::from_ymd(year, month, day).unwrap()
    }

    fn resolve_gregorian(shortcut: RangeShortcut, today: PlainDate) -> DateRange {
        resolve(shortcut, today, &Gregorian, Weekday::Monday, false).unwrap()
    }

    #[test]
    fn test_day_based_shortcuts() {
        // 2024-06-15 is a Saturday
        let today = date(2024, 6, 15);

        struct TestCase {
            shortcut: RangeShortcut,
            start: (i32, u8, u8),
            end: (i32, u8, u8),
        }

        let cases = [
            TestCase {
                shortcut: RangeShortcut::Today,
                start: (2024, 6, 15),
                end: (2024, 6, 15),
            },
            TestCase {
                shortcut: RangeShortcut::Yesterday,
                start: (2024, 6, 14),
                end: (2024, 6, 14),
            },
            TestCase {
                shortcut: RangeShortcut::Last7Days,
                start: (2024, 6, 9),
                end: (2024, 6, 15),
            },
            TestCase {
                shortcut: RangeShortcut::Last30Days,
                start: (2024, 5, 17),
                end: (2024, 6, 15),
            },
            TestCase {
                shortcut: RangeShortcut::Rolling7Days,
                start: (2024, 6, 8),
                end: (2024, 6, 15),
            },
            TestCase {
                shortcut: RangeShortcut::Next1Day,
                start: (2024, 6, 15),
                end: (2024, 6, 16),
            },
            TestCase {
                shortcut: RangeShortcut::Next7Days,
                start: (2024, 6, 15),
                end: (2024, 6, 22),
            },
        ];

        for case in &cases {
            assert_eq!(
                resolve_gregorian(case.shortcut, today),
                DateRange::complete(
                    date(case.start.0, case.start.1, case.start.2),
                    date(case.end.0, case.end.1, case.end.2),
                ),
                "resolving {}",
                case.shortcut
            );
        }
    }

    #[test]
    fn test_week_shortcuts() {
        let today = date(2024, 6, 15);
        assert_eq!(
            resolve_gregorian(RangeShortcut::WeekToDate, today),
            DateRange::complete(date(2024, 6, 10), today)
        );
        assert_eq!(
            resolve_gregorian(RangeShortcut::ThisWeek, today),
            DateRange::complete(date(2024, 6, 10), date(2024, 6, 16))
        );
        assert_eq!(
            resolve_gregorian(RangeShortcut::LastWeek, today),
            DateRange::complete(date(2024, 6, 3), date(2024, 6, 9))
        );
        assert_eq!(
            resolve_gregorian(RangeShortcut::NextWeek, today),
            DateRange::complete(date(2024, 6, 17), date(2024, 6, 23))
        );
    }

    #[test]
    fn test_this_week_future_only_starts_today() {
        let today = date(2024, 6, 15);
        let range = resolve(
            RangeShortcut::ThisWeek,
            today,
            &Gregorian,
            Weekday::Monday,
            true,
        )
        .unwrap();
        assert_eq!(range, DateRange::complete(today, date(2024, 6, 16)));
    }

    #[test]
    fn test_month_shortcuts() {
        let today = date(2024, 6, 15);
        assert_eq!(
            resolve_gregorian(RangeShortcut::MonthToDate, today),
            DateRange::complete(date(2024, 6, 1), today)
        );
        assert_eq!(
            resolve_gregorian(RangeShortcut::ThisMonth, today),
            DateRange::complete(date(2024, 6, 1), date(2024, 6, 30))
        );
        assert_eq!(
            resolve_gregorian(RangeShortcut::LastMonth, today),
            DateRange::complete(date(2024, 5, 1), date(2024, 5, 31))
        );
        assert_eq!(
            resolve_gregorian(RangeShortcut::NextMonth, today),
            DateRange::complete(date(2024, 7, 1), date(2024, 7, 31))
        );
    }

    #[test]
    fn test_month_shortcuts_across_year_boundary() {
        let today = date(2024, 1, 15);
        assert_eq!(
            resolve_gregorian(RangeShortcut::LastMonth, today),
            DateRange::complete(date(2023, 12, 1), date(2023, 12, 31))
        );
        let december = date(2024, 12, 15);
        assert_eq!(
            resolve_gregorian(RangeShortcut::NextMonth, december),
            DateRange::complete(date(2025, 1, 1), date(2025, 1, 31))
        );
    }

    #[test]
    fn test_quarter_shortcuts() {
        let today = date(2024, 6, 15);
        assert_eq!(
            resolve_gregorian(RangeShortcut::QuarterToDate, today),
            DateRange::complete(date(2024, 4, 1), today)
        );
        assert_eq!(
            resolve_gregorian(RangeShortcut::ThisQuarter, today),
            DateRange::complete(date(2024, 4, 1), date(2024, 6, 30))
        );
        assert_eq!(
            resolve_gregorian(RangeShortcut::LastQuarter, today),
            DateRange::complete(date(2024, 1, 1), date(2024, 3, 31))
        );
        assert_eq!(
            resolve_gregorian(RangeShortcut::NextQuarter, today),
            DateRange::complete(date(2024, 7, 1), date(2024, 9, 30))
        );
    }

    #[test]
    fn test_quarter_shortcuts_wrap_years() {
        // first quarter: last quarter is Q4 of the previous year
        assert_eq!(
            resolve_gregorian(RangeShortcut::LastQuarter, date(2024, 1, 15)),
            DateRange::complete(date(2023, 10, 1), date(2023, 12, 31))
        );
        // fourth quarter: next quarter is Q1 of the following year
        assert_eq!(
            resolve_gregorian(RangeShortcut::NextQuarter, date(2024, 11, 15)),
            DateRange::complete(date(2025, 1, 1), date(2025, 3, 31))
        );
    }

    #[test]
    fn test_year_shortcuts() {
        let today = date(2024, 6, 15);
        assert_eq!(
            resolve_gregorian(RangeShortcut::YearToDate, today),
            DateRange::complete(date(2024, 1, 1), today)
        );
        assert_eq!(
            resolve_gregorian(RangeShortcut::ThisYear, today),
            DateRange::complete(date(2024, 1, 1), date(2024, 12, 31))
        );
        assert_eq!(
            resolve_gregorian(RangeShortcut::LastYear, today),
            DateRange::complete(date(2023, 1, 1), date(2023, 12, 31))
        );
        assert_eq!(
            resolve_gregorian(RangeShortcut::NextYear, today),
            DateRange::complete(date(2025, 1, 1), date(2025, 12, 31))
        );
    }

    #[test]
    fn test_previous_business_week() {
        let today = date(2024, 6, 15);
        // previous Monday through Friday
        assert_eq!(
            resolve_gregorian(RangeShortcut::PreviousBusinessWeek, today),
            DateRange::complete(date(2024, 6, 3), date(2024, 6, 7))
        );
        // with a Saturday week start the previous week runs Jun 8-14, so
        // its Monday is Jun 10
        let range = resolve(
            RangeShortcut::PreviousBusinessWeek,
            today,
            &Gregorian,
            Weekday::Saturday,
            false,
        )
        .unwrap();
        assert_eq!(range, DateRange::complete(date(2024, 6, 10), date(2024, 6, 14)));
    }

    #[test]
    fn test_previous_business_month_is_full_month() {
        let today = date(2024, 6, 15);
        assert_eq!(
            resolve_gregorian(RangeShortcut::PreviousBusinessMonth, today),
            resolve_gregorian(RangeShortcut::LastMonth, today)
        );
    }

    #[test]
    fn test_all_time_spans_calendar() {
        let range = resolve_gregorian(RangeShortcut::AllTime, date(2024, 6, 15));
        assert_eq!(
            range,
            DateRange::complete(Gregorian.min_supported(), Gregorian.max_supported())
        );
    }

    #[test]
    fn test_custom_has_no_range() {
        assert_eq!(
            resolve(
                RangeShortcut::Custom,
                date(2024, 6, 15),
                &Gregorian,
                Weekday::Monday,
                false
            ),
            None
        );
    }

    #[test]
    fn test_every_other_shortcut_resolves() {
        let today = date(2024, 6, 15);
        for shortcut in RangeShortcut::ALL {
            let resolved = resolve(shortcut, today, &Gregorian, Weekday::Monday, false);
            if shortcut == RangeShortcut::Custom {
                assert!(resolved.is_none());
            } else {
                let range = resolved.unwrap();
                assert!(range.is_complete(), "{shortcut} resolved incomplete");
                assert_eq!(range, range.canonical(), "{shortcut} resolved inverted");
            }
        }
    }

    #[test]
    fn test_persian_month_shortcuts() {
        let cal = Persian;
        // 2024-06-15 falls in Khordad 1403
        let today = date(2024, 6, 15);
        let this_month =
            resolve(RangeShortcut::ThisMonth, today, &cal, Weekday::Saturday, false).unwrap();
        let start = cal.to_fields(this_month.start().unwrap());
        let end = cal.to_fields(this_month.end().unwrap());
        assert_eq!((start.year, start.month, start.day), (1403, 3, 1));
        assert_eq!((end.year, end.month, end.day), (1403, 3, 31));

        let last_month =
            resolve(RangeShortcut::LastMonth, today, &cal, Weekday::Saturday, false).unwrap();
        let start = cal.to_fields(last_month.start().unwrap());
        let end = cal.to_fields(last_month.end().unwrap());
        assert_eq!((start.year, start.month, start.day), (1403, 2, 1));
        assert_eq!((end.year, end.month, end.day), (1403, 2, 31));

        // crossing the Persian new year
        let in_farvardin = cal.from_fields(1403, 1, 10).unwrap();
        let prior =
            resolve(RangeShortcut::LastMonth, in_farvardin, &cal, Weekday::Saturday, false)
                .unwrap();
        let start = cal.to_fields(prior.start().unwrap());
        let end = cal.to_fields(prior.end().unwrap());
        // 1402 is not a leap year, so Esfand has 29 days
        assert_eq!((start.year, start.month, start.day), (1402, 12, 1));
        assert_eq!((end.year, end.month, end.day), (1402, 12, 29));
    }

    #[test]
    fn test_endpoints_clamped_near_span_edge() {
        let today = date(9999, 12, 20);
        let next = resolve_gregorian(RangeShortcut::Next30Days, today);
        assert_eq!(next.end(), Some(Gregorian.max_supported()));

        let early = date(1, 1, 5);
        let last = resolve_gregorian(RangeShortcut::Last30Days, early);
        assert_eq!(last.start(), Some(Gregorian.min_supported()));
    }
}
