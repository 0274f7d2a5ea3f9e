//! Range constraints and validation.
//!
//! Checks run in a fixed order so that the reported violation is stable:
//! minimum date, maximum date, past-only, future-only, minimum span,
//! maximum span. The first failing check wins.

use serde::{Deserialize, Serialize};

use crate::range::DateRange;
use crate::types::PlainDate;

/// Limits a range selection must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeConstraints {
    /// Earliest selectable start date.
    pub min_date: Option<PlainDate>,
    /// Latest selectable end date.
    pub max_date: Option<PlainDate>,
    /// Restrict every endpoint to today or earlier.
    pub past_only: bool,
    /// Restrict every endpoint to today or later.
    pub future_only: bool,
    /// Minimum inclusive day count.
    pub min_days: Option<u32>,
    /// Maximum inclusive day count.
    pub max_days: Option<u32>,
}

/// The first constraint a range fails, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintViolation {
    /// Start date falls before the minimum date.
    MinDate(PlainDate),
    /// End date falls after the maximum date.
    MaxDate(PlainDate),
    /// An endpoint falls after today.
    PastOnly,
    /// An endpoint falls before today.
    FutureOnly,
    /// The range spans fewer days than allowed.
    MinDays(u32),
    /// The range spans more days than allowed.
    MaxDays(u32),
}

/// Validation outcome for a range.
///
/// An incomplete range (either endpoint missing) is never valid but carries
/// no violation either; constraint checks only apply to complete ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeValidity {
    Valid,
    #[default]
    Incomplete,
    Invalid(ConstraintViolation),
}

impl RangeValidity {
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The violation, when the range is complete but fails a constraint.
    pub const fn violation(self) -> Option<ConstraintViolation> {
        match self {
            Self::Invalid(violation) => Some(violation),
            Self::Valid | Self::Incomplete => None,
        }
    }
}

/// Checks `range` against `constraints` as of `today`.
pub fn validate(
    range: DateRange,
    constraints: &RangeConstraints,
    today: PlainDate,
) -> RangeValidity {
    let (Some(start), Some(end)) = range.endpoints() else {
        return RangeValidity::Incomplete;
    };

    if let Some(min) = constraints.min_date {
        if start < min {
            return RangeValidity::Invalid(ConstraintViolation::MinDate(min));
        }
    }
    if let Some(max) = constraints.max_date {
        if end > max {
            return RangeValidity::Invalid(ConstraintViolation::MaxDate(max));
        }
    }

    if constraints.past_only && (start > today || end > today) {
        return RangeValidity::Invalid(ConstraintViolation::PastOnly);
    }
    if constraints.future_only && (start < today || end < today) {
        return RangeValidity::Invalid(ConstraintViolation::FutureOnly);
    }

    let day_count = i64::from(start.days_until(end)) + 1;
    if let Some(min_days) = constraints.min_days {
        if day_count < i64::from(min_days) {
            return RangeValidity::Invalid(ConstraintViolation::MinDays(min_days));
        }
    }
    if let Some(max_days) = constraints.max_days {
        if day_count > i64::from(max_days) {
            return RangeValidity::Invalid(ConstraintViolation::MaxDays(max_days));
        }
    }

    RangeValidity::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> PlainDate {
        PlainDate::from_ymd(year, month, day).unwrap()
    }

    fn today() -> PlainDate {
        date(2024, 6, 15)
    }

    #[test]
    fn test_unconstrained_complete_range_is_valid() {
        let range = DateRange::complete(date(2024, 6, 1), date(2024, 6, 10));
        assert_eq!(
            validate(range, &RangeConstraints::default(), today()),
            RangeValidity::Valid
        );
    }

    #[test]
    fn test_incomplete_range() {
        let constraints = RangeConstraints::default();
        assert_eq!(
            validate(DateRange::default(), &constraints, today()),
            RangeValidity::Incomplete
        );
        let half = DateRange::new(Some(date(2024, 6, 1)), None);
        assert_eq!(
            validate(half, &constraints, today()),
            RangeValidity::Incomplete
        );
        assert!(!validate(half, &constraints, today()).is_valid());
        assert_eq!(validate(half, &constraints, today()).violation(), None);
    }

    #[test]
    fn test_min_and_max_date() {
        let constraints = RangeConstraints {
            min_date: Some(date(2024, 6, 1)),
            max_date: Some(date(2024, 6, 30)),
            ..RangeConstraints::default()
        };

        let inside = DateRange::complete(date(2024, 6, 1), date(2024, 6, 30));
        assert!(validate(inside, &constraints, today()).is_valid());

        let early = DateRange::complete(date(2024, 5, 31), date(2024, 6, 10));
        assert_eq!(
            validate(early, &constraints, today()),
            RangeValidity::Invalid(ConstraintViolation::MinDate(date(2024, 6, 1)))
        );

        let late = DateRange::complete(date(2024, 6, 10), date(2024, 7, 1));
        assert_eq!(
            validate(late, &constraints, today()),
            RangeValidity::Invalid(ConstraintViolation::MaxDate(date(2024, 6, 30)))
        );
    }

    #[test]
    fn test_past_only() {
        let constraints = RangeConstraints {
            past_only: true,
            ..RangeConstraints::default()
        };

        // today itself counts as past
        let ending_today = DateRange::complete(date(2024, 6, 10), today());
        assert!(validate(ending_today, &constraints, today()).is_valid());

        let into_future = DateRange::complete(date(2024, 6, 10), date(2024, 6, 16));
        assert_eq!(
            validate(into_future, &constraints, today()),
            RangeValidity::Invalid(ConstraintViolation::PastOnly)
        );
    }

    #[test]
    fn test_future_only() {
        let constraints = RangeConstraints {
            future_only: true,
            ..RangeConstraints::default()
        };

        // today itself counts as future
        let starting_today = DateRange::complete(today(), date(2024, 6, 20));
        assert!(validate(starting_today, &constraints, today()).is_valid());

        let into_past = DateRange::complete(date(2024, 6, 14), date(2024, 6, 20));
        assert_eq!(
            validate(into_past, &constraints, today()),
            RangeValidity::Invalid(ConstraintViolation::FutureOnly)
        );
    }

    #[test]
    fn test_span_limits() {
        let constraints = RangeConstraints {
            min_days: Some(3),
            max_days: Some(7),
            ..RangeConstraints::default()
        };

        struct TestCase {
            end_day: u8,
            expected: RangeValidity,
            description: &'static str,
        }

        let cases = [
            TestCase {
                end_day: 2,
                expected: RangeValidity::Invalid(ConstraintViolation::MinDays(3)),
                description: "two days is below the minimum",
            },
            TestCase {
                end_day: 3,
                expected: RangeValidity::Valid,
                description: "three days meets the minimum exactly",
            },
            TestCase {
                end_day: 7,
                expected: RangeValidity::Valid,
                description: "seven days meets the maximum exactly",
            },
            TestCase {
                end_day: 8,
                expected: RangeValidity::Invalid(ConstraintViolation::MaxDays(7)),
                description: "eight days exceeds the maximum",
            },
        ];

        for case in &cases {
            let range = DateRange::complete(date(2024, 6, 1), date(2024, 6, case.end_day));
            assert_eq!(
                validate(range, &constraints, today()),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_single_day_range_counts_one_day() {
        let constraints = RangeConstraints {
            min_days: Some(1),
            ..RangeConstraints::default()
        };
        let single = DateRange::complete(date(2024, 6, 10), date(2024, 6, 10));
        assert!(validate(single, &constraints, today()).is_valid());
    }

    #[test]
    fn test_check_order_min_date_before_span() {
        // a range failing both min-date and min-days reports min-date
        let constraints = RangeConstraints {
            min_date: Some(date(2024, 6, 1)),
            min_days: Some(10),
            ..RangeConstraints::default()
        };
        let range = DateRange::complete(date(2024, 5, 30), date(2024, 5, 31));
        assert_eq!(
            validate(range, &constraints, today()),
            RangeValidity::Invalid(ConstraintViolation::MinDate(date(2024, 6, 1)))
        );
    }

    #[test]
    fn test_check_order_past_only_before_span() {
        let constraints = RangeConstraints {
            past_only: true,
            max_days: Some(2),
            ..RangeConstraints::default()
        };
        let range = DateRange::complete(date(2024, 6, 14), date(2024, 6, 17));
        assert_eq!(
            validate(range, &constraints, today()),
            RangeValidity::Invalid(ConstraintViolation::PastOnly)
        );
    }
}
