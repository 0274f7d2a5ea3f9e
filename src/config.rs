//! Picker configuration: calendar, clock, constraints, and presets.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::calendar::{Calendar, Gregorian};
use crate::consts::SECONDS_PER_DAY;
use crate::shortcut::RangeShortcut;
use crate::types::{PlainDate, Weekday};
use crate::validate::RangeConstraints;

/// Source of the current civil date.
///
/// Injected so that "today"-relative shortcuts and validation are
/// deterministic under test.
pub trait Clock: Send + Sync {
    fn today(&self) -> PlainDate;
}

/// Wall-clock dates in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> PlainDate {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let days = i32::try_from(seconds / SECONDS_PER_DAY).unwrap_or(i32::MAX);
        PlainDate::from_epoch_days(days)
    }
}

/// A clock frozen at a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub PlainDate);

impl Clock for FixedClock {
    fn today(&self) -> PlainDate {
        self.0
    }
}

/// Everything a [`RangePicker`](crate::picker::RangePicker) needs besides
/// its mutable state.
#[derive(Clone)]
pub struct PickerConfig {
    /// Calendar system for month and year arithmetic.
    pub calendar: Arc<dyn Calendar>,
    /// Source of "today".
    pub clock: Arc<dyn Clock>,
    /// Overrides the calendar's first day of the week when set.
    pub first_day_of_week: Option<Weekday>,
    /// Selection limits.
    pub constraints: RangeConstraints,
    /// Explicit preset list; `None` uses the filtered defaults.
    pub presets: Option<Vec<RangeShortcut>>,
    /// Whether applied custom ranges are remembered.
    pub remember_recent_ranges: bool,
}

impl PickerConfig {
    const DEFAULT_PRESETS: [RangeShortcut; 8] = [
        RangeShortcut::Today,
        RangeShortcut::Yesterday,
        RangeShortcut::Last7Days,
        RangeShortcut::Last30Days,
        RangeShortcut::Last90Days,
        RangeShortcut::WeekToDate,
        RangeShortcut::MonthToDate,
        RangeShortcut::Custom,
    ];

    pub fn new(calendar: Arc<dyn Calendar>) -> Self {
        Self {
            calendar,
            clock: Arc::new(SystemClock),
            first_day_of_week: None,
            constraints: RangeConstraints::default(),
            presets: None,
            remember_recent_ranges: true,
        }
    }

    /// The effective first day of the week: the override when set,
    /// otherwise the calendar's convention.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
            .unwrap_or_else(|| self.calendar.first_day_of_week())
    }

    /// The default preset list, filtered by the past-only and future-only
    /// constraints. Past-only drops forward-looking shortcuts; otherwise
    /// future-only drops backward-looking ones.
    pub fn default_presets(&self) -> Vec<RangeShortcut> {
        let mut presets: Vec<RangeShortcut> = Self::DEFAULT_PRESETS.to_vec();
        if self.constraints.past_only {
            presets.retain(|preset| !preset.is_forward_looking());
        } else if self.constraints.future_only {
            presets.retain(|preset| !preset.is_backward_looking());
        }
        presets
    }

    /// The preset list shown to the user.
    pub fn active_presets(&self) -> Vec<RangeShortcut> {
        self.presets
            .clone()
            .unwrap_or_else(|| self.default_presets())
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new(Arc::new(Gregorian))
    }
}
