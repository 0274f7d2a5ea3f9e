use serde::{Deserialize, Serialize};

use crate::consts::RECENT_RANGES_CAP;
use crate::range::DateRange;

/// Most-recently-applied custom ranges, newest first.
///
/// Re-adding a range that is already present moves it to the front instead
/// of duplicating it. The list holds at most [`RECENT_RANGES_CAP`] entries;
/// the oldest falls off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentRanges {
    entries: Vec<DateRange>,
}

impl RecentRanges {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Pushes a range to the front, deduplicating and evicting the oldest
    /// entry past the cap.
    pub fn add(&mut self, range: DateRange) {
        self.entries.retain(|entry| *entry != range);
        self.entries.insert(0, range);
        self.entries.truncate(RECENT_RANGES_CAP);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DateRange> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[DateRange] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlainDate;

    fn range(start_day: u8, end_day: u8) -> DateRange {
        DateRange::complete(
            PlainDate::from_ymd(2024, 6, start_day).unwrap(),
            PlainDate::from_ymd(2024, 6, end_day).unwrap(),
        )
    }

    #[test]
    fn test_newest_first() {
        let mut recent = RecentRanges::new();
        recent.add(range(1, 2));
        recent.add(range(3, 4));
        assert_eq!(recent.as_slice(), &[range(3, 4), range(1, 2)]);
    }

    #[test]
    fn test_readding_moves_to_front() {
        let mut recent = RecentRanges::new();
        recent.add(range(1, 2));
        recent.add(range(3, 4));
        recent.add(range(1, 2));
        assert_eq!(recent.as_slice(), &[range(1, 2), range(3, 4)]);
        assert_eq!(recent.len(), 2);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut recent = RecentRanges::new();
        recent.add(range(1, 1));
        recent.add(range(2, 2));
        recent.add(range(3, 3));
        recent.add(range(4, 4));
        assert_eq!(recent.len(), RECENT_RANGES_CAP);
        assert_eq!(recent.as_slice(), &[range(4, 4), range(3, 3), range(2, 2)]);
    }

    #[test]
    fn test_clear() {
        let mut recent = RecentRanges::new();
        recent.add(range(1, 2));
        recent.clear();
        assert!(recent.is_empty());
    }
}
