use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Predefined range shortcuts for quick selection.
///
/// `Custom` is the only shortcut that does not resolve to a concrete range;
/// it marks a manually picked pair of dates.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum RangeShortcut {
    /// Today only.
    Today,
    /// Yesterday only.
    Yesterday,
    /// Last 7 days, including today.
    Last7Days,
    /// Last 14 days, including today.
    Last14Days,
    /// Last 30 days, including today.
    Last30Days,
    /// Last 60 days, including today.
    Last60Days,
    /// Last 90 days, including today.
    Last90Days,
    /// The whole previous week.
    LastWeek,
    /// First to last day of the previous month.
    LastMonth,
    /// The previous three-month period.
    LastQuarter,
    /// First to last day of the previous year.
    LastYear,
    /// Start of the current week to today.
    WeekToDate,
    /// First of the current month to today.
    MonthToDate,
    /// Start of the current quarter to today.
    QuarterToDate,
    /// First day of the current year to today.
    YearToDate,
    /// 7 days ago to today.
    Rolling7Days,
    /// 30 days ago to today.
    Rolling30Days,
    /// 90 days ago to today.
    Rolling90Days,
    /// The whole current week.
    ThisWeek,
    /// First to last day of the current month.
    ThisMonth,
    /// The whole current quarter.
    ThisQuarter,
    /// First to last day of the current year.
    ThisYear,
    /// Today to tomorrow.
    Next1Day,
    /// Today to two days from today.
    Next2Days,
    /// Today to three days from today.
    Next3Days,
    /// Today to 7 days from today.
    Next7Days,
    /// Today to 14 days from today.
    Next14Days,
    /// Today to 30 days from today.
    Next30Days,
    /// Today to 90 days from today.
    Next90Days,
    /// The whole next week.
    NextWeek,
    /// First to last day of the next month.
    NextMonth,
    /// The next three-month period.
    NextQuarter,
    /// First to last day of the next year.
    NextYear,
    /// Business days of the previous week.
    PreviousBusinessWeek,
    /// The previous calendar month.
    PreviousBusinessMonth,
    /// The calendar's full supported span.
    AllTime,
    /// Manual selection.
    Custom,
}

impl RangeShortcut {
    /// Every shortcut, in declaration order.
    pub const ALL: [Self; 37] = [
        Self::Today,
        Self::Yesterday,
        Self::Last7Days,
        Self::Last14Days,
        Self::Last30Days,
        Self::Last60Days,
        Self::Last90Days,
        Self::LastWeek,
        Self::LastMonth,
        Self::LastQuarter,
        Self::LastYear,
        Self::WeekToDate,
        Self::MonthToDate,
        Self::QuarterToDate,
        Self::YearToDate,
        Self::Rolling7Days,
        Self::Rolling30Days,
        Self::Rolling90Days,
        Self::ThisWeek,
        Self::ThisMonth,
        Self::ThisQuarter,
        Self::ThisYear,
        Self::Next1Day,
        Self::Next2Days,
        Self::Next3Days,
        Self::Next7Days,
        Self::Next14Days,
        Self::Next30Days,
        Self::Next90Days,
        Self::NextWeek,
        Self::NextMonth,
        Self::NextQuarter,
        Self::NextYear,
        Self::PreviousBusinessWeek,
        Self::PreviousBusinessMonth,
        Self::AllTime,
        Self::Custom,
    ];

    /// Shortcuts whose resolved range can reach past today. These are
    /// dropped from the default preset list when only past dates are
    /// selectable.
    pub const fn is_forward_looking(self) -> bool {
        matches!(
            self,
            Self::Next7Days
                | Self::Next14Days
                | Self::Next30Days
                | Self::Next90Days
                | Self::NextWeek
                | Self::NextMonth
                | Self::NextQuarter
                | Self::NextYear
        )
    }

    /// Shortcuts whose resolved range always reaches before today. These
    /// are dropped from the default preset list when only future dates are
    /// selectable.
    pub const fn is_backward_looking(self) -> bool {
        matches!(
            self,
            Self::Yesterday
                | Self::Last7Days
                | Self::Last14Days
                | Self::Last30Days
                | Self::Last60Days
                | Self::Last90Days
                | Self::LastWeek
                | Self::LastMonth
                | Self::LastQuarter
                | Self::LastYear
                | Self::WeekToDate
                | Self::MonthToDate
                | Self::QuarterToDate
                | Self::YearToDate
                | Self::Rolling7Days
                | Self::Rolling30Days
                | Self::Rolling90Days
                | Self::PreviousBusinessWeek
                | Self::PreviousBusinessMonth
        )
    }
}
