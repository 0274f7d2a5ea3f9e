use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::RANGE_SEPARATOR;
use crate::types::PlainDate;

/// A possibly-incomplete date range with inclusive endpoints.
///
/// Equality is structural. Construction does not enforce `start <= end`:
/// the selection state machine may hold an inverted pair transiently and is
/// the single place where order is canonicalized before a range is exposed
/// as valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DateRange {
    start: Option<PlainDate>,
    end: Option<PlainDate>,
}

impl DateRange {
    /// Creates a range from possibly-missing endpoints.
    pub const fn new(start: Option<PlainDate>, end: Option<PlainDate>) -> Self {
        Self { start, end }
    }

    /// Creates a range with both endpoints present.
    pub const fn complete(start: PlainDate, end: PlainDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Returns the start endpoint, if set.
    pub const fn start(&self) -> Option<PlainDate> {
        self.start
    }

    /// Returns the end endpoint, if set.
    pub const fn end(&self) -> Option<PlainDate> {
        self.end
    }

    /// Returns both endpoints as a tuple.
    pub const fn endpoints(&self) -> (Option<PlainDate>, Option<PlainDate>) {
        (self.start, self.end)
    }

    /// Whether both endpoints are set.
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// A copy with endpoints swapped into chronological order. Incomplete
    /// ranges are returned unchanged.
    pub fn canonical(self) -> Self {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start > end => Self::complete(end, start),
            _ => self,
        }
    }

    /// Inclusive day count, when both endpoints are set. Negative or zero
    /// for inverted pairs; callers wanting a meaningful count canonicalize
    /// first.
    pub fn day_count(&self) -> Option<i32> {
        let start = self.start?;
        let end = self.end?;
        Some(start.days_until(end) + 1)
    }

    /// Whether `date` lies inside the range. Incomplete ranges contain
    /// nothing.
    pub fn contains(&self, date: PlainDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "{start}")?,
            None => write!(f, "..")?,
        }
        write!(f, "{RANGE_SEPARATOR}")?;
        match self.end {
            Some(end) => write!(f, "{end}"),
            None => write!(f, ".."),
        }
    }
}
