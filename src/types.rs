use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DAYS_PER_ERA, DAYS_PER_WEEK, EPOCH_OFFSET,
    EPOCH_WEEKDAY, ERA_YEARS, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Day of the week, Monday-first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Monday-first index in `0..=6`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_index(index: u8) -> Self {
        match index % 7 {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }
}

/// Error type for date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside the calendar's supported span.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    /// Month outside the calendar's month numbering.
    #[error("Invalid month: {month} for year {year}")]
    InvalidMonth { year: i32, month: u8 },

    /// Day outside the month's length.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// Input that is not a date at all.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Empty input string.
    #[error("Empty date string")]
    EmptyInput,
}

/// A calendar-independent civil date, stored as whole days since the Unix
/// epoch (1970-01-01). Comparisons are date-only by construction; there is
/// no time-of-day component to cause off-by-one surprises.
///
/// Construction, display, and parsing use proleptic Gregorian civil rules;
/// other calendar systems interpret the same day number through the
/// [`Calendar`](crate::Calendar) trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDate(i32);

impl PlainDate {
    /// Creates a date from Gregorian year, month, and day.
    ///
    /// # Errors
    /// Returns a `DateError` variant naming the first invalid component.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth { year, month });
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self(days_from_civil(year, month, day)))
    }

    /// Creates a date directly from a day number relative to the Unix epoch.
    #[inline]
    pub const fn from_epoch_days(days: i32) -> Self {
        Self(days)
    }

    /// Days since the Unix epoch (negative before 1970).
    #[inline]
    pub const fn epoch_days(self) -> i32 {
        self.0
    }

    /// Gregorian (year, month, day) fields of this date.
    pub const fn to_ymd(self) -> (i32, u8, u8) {
        civil_from_days(self.0)
    }

    /// Gregorian year.
    pub const fn year(self) -> i32 {
        self.to_ymd().0
    }

    /// Gregorian month (1-12).
    pub const fn month(self) -> u8 {
        self.to_ymd().1
    }

    /// Gregorian day of month.
    pub const fn day(self) -> u8 {
        self.to_ymd().2
    }

    /// This date shifted by `days` (negative moves backwards). Saturates at
    /// the representable extremes rather than wrapping.
    #[inline]
    pub const fn add_days(self, days: i32) -> Self {
        Self(self.0.saturating_add(days))
    }

    /// Signed whole days from `self` to `other`.
    #[inline]
    pub const fn days_until(self, other: Self) -> i32 {
        other.0 - self.0
    }

    /// Day of the week.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn weekday(self) -> Weekday {
        let index = (self.0 + EPOCH_WEEKDAY).rem_euclid(DAYS_PER_WEEK);
        Weekday::from_index(index as u8)
    }
}

// --- Gregorian civil helpers ---

pub(crate) const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Day number since the Unix epoch for a civil (year, month, day) triple.
/// Standard era-based civil-from-days arithmetic; valid for any year the
/// crate supports.
pub(crate) const fn days_from_civil(year: i32, month: u8, day: u8) -> i32 {
    let y = if month <= FEBRUARY { year - 1 } else { year };
    let era = y.div_euclid(ERA_YEARS);
    let yoe = y.rem_euclid(ERA_YEARS);
    let m = month as i32;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_OFFSET
}

/// Inverse of [`days_from_civil`].
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub(crate) const fn civil_from_days(days: i32) -> (i32, u8, u8) {
    let z = days + EPOCH_OFFSET;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z.rem_euclid(DAYS_PER_ERA);
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe + era * ERA_YEARS;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (
        if month <= 2 { y + 1 } else { y },
        month as u8,
        day as u8,
    )
}

impl fmt::Display for PlainDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.to_ymd();
        write!(f, "{year:04}-{month:02}-{day:02}")
    }
}

impl FromStr for PlainDate {
    type Err = DateError;

    /// Parses strict ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parts[0]
            .parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;

        Self::from_ymd(year, month, day)
    }
}

impl serde::Serialize for PlainDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PlainDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
