//! Data-driven localization.
//!
//! A [`Localization`] is a complete key-to-string table, validated at
//! construction so a missing translation is caught when the table is built
//! rather than surfacing as a blank label later. A [`LocalizerRegistry`]
//! maps locale tags to tables with primary-subtag fallback, so `"fr-CA"`
//! finds a `"fr"` table when no exact match is registered.

use std::collections::HashMap;

use thiserror::Error;

use crate::consts::TEMPLATE_PLACEHOLDER;
use crate::shortcut::RangeShortcut;
use crate::validate::ConstraintViolation;

/// Every piece of user-facing text the picker needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Apply,
    Cancel,
    Clear,
    Close,
    Recent,
    QuickSelect,
    SelectDateRange,
    /// Label for a range shortcut button.
    Shortcut(RangeShortcut),
    /// `{0}` is the formatted minimum date.
    StartDateCannotBeEarlierThan,
    /// `{0}` is the formatted maximum date.
    EndDateCannotBeLaterThan,
    SelectedDatesMustBeInThePast,
    SelectedDatesMustBeInTheFuture,
    /// `{0}` is the minimum day count.
    RangeMustBeAtLeastDays,
    /// `{0}` is the maximum day count.
    RangeCannotExceedDays,
}

impl TextKey {
    const FIXED: [Self; 13] = [
        Self::Apply,
        Self::Cancel,
        Self::Clear,
        Self::Close,
        Self::Recent,
        Self::QuickSelect,
        Self::SelectDateRange,
        Self::StartDateCannotBeEarlierThan,
        Self::EndDateCannotBeLaterThan,
        Self::SelectedDatesMustBeInThePast,
        Self::SelectedDatesMustBeInTheFuture,
        Self::RangeMustBeAtLeastDays,
        Self::RangeCannotExceedDays,
    ];

    /// Iterates every key a complete table must define.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::FIXED
            .into_iter()
            .chain(RangeShortcut::ALL.into_iter().map(Self::Shortcut))
    }
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    /// The table is missing one or more required keys.
    #[error("localization table is missing keys: {0:?}")]
    MissingKeys(Vec<TextKey>),
}

/// A complete localization table.
#[derive(Debug, Clone)]
pub struct Localization {
    table: HashMap<TextKey, String>,
}

impl Localization {
    /// Builds a localization from a table, verifying every key is present.
    /// Extra keys are allowed and ignored.
    pub fn from_table(table: HashMap<TextKey, String>) -> Result<Self, LocalizationError> {
        let missing: Vec<TextKey> = TextKey::all()
            .filter(|key| !table.contains_key(key))
            .collect();
        if missing.is_empty() {
            Ok(Self { table })
        } else {
            Err(LocalizationError::MissingKeys(missing))
        }
    }

    /// The built-in English table.
    pub fn english() -> Self {
        let mut table = HashMap::new();
        for key in TextKey::all() {
            table.insert(key, english_text(key).to_owned());
        }
        Self { table }
    }

    /// Looks up the text for a key. Tables are validated as complete at
    /// construction, so lookups never miss.
    pub fn text(&self, key: TextKey) -> &str {
        self.table.get(&key).map_or("", String::as_str)
    }

    /// Label for a shortcut button.
    pub fn shortcut_text(&self, shortcut: RangeShortcut) -> &str {
        self.text(TextKey::Shortcut(shortcut))
    }

    /// Renders the user-facing message for a constraint violation.
    pub fn violation_message(&self, violation: ConstraintViolation) -> String {
        match violation {
            ConstraintViolation::MinDate(min) => self
                .text(TextKey::StartDateCannotBeEarlierThan)
                .replace(TEMPLATE_PLACEHOLDER, &min.to_string()),
            ConstraintViolation::MaxDate(max) => self
                .text(TextKey::EndDateCannotBeLaterThan)
                .replace(TEMPLATE_PLACEHOLDER, &max.to_string()),
            ConstraintViolation::PastOnly => {
                self.text(TextKey::SelectedDatesMustBeInThePast).to_owned()
            }
            ConstraintViolation::FutureOnly => self
                .text(TextKey::SelectedDatesMustBeInTheFuture)
                .to_owned(),
            ConstraintViolation::MinDays(days) => self
                .text(TextKey::RangeMustBeAtLeastDays)
                .replace(TEMPLATE_PLACEHOLDER, &days.to_string()),
            ConstraintViolation::MaxDays(days) => self
                .text(TextKey::RangeCannotExceedDays)
                .replace(TEMPLATE_PLACEHOLDER, &days.to_string()),
        }
    }
}

impl Default for Localization {
    fn default() -> Self {
        Self::english()
    }
}

fn english_text(key: TextKey) -> &'static str {
    match key {
        TextKey::Apply => "Apply",
        TextKey::Cancel => "Cancel",
        TextKey::Clear => "Clear",
        TextKey::Close => "Close",
        TextKey::Recent => "Recent",
        TextKey::QuickSelect => "Quick Select",
        TextKey::SelectDateRange => "Select Date Range",
        TextKey::Shortcut(shortcut) => english_shortcut_text(shortcut),
        TextKey::StartDateCannotBeEarlierThan => "Start date cannot be earlier than {0}",
        TextKey::EndDateCannotBeLaterThan => "End date cannot be later than {0}",
        TextKey::SelectedDatesMustBeInThePast => "Selected dates must be in the past",
        TextKey::SelectedDatesMustBeInTheFuture => "Selected dates must be in the future",
        TextKey::RangeMustBeAtLeastDays => "Range must be at least {0} days",
        TextKey::RangeCannotExceedDays => "Range cannot exceed {0} days",
    }
}

fn english_shortcut_text(shortcut: RangeShortcut) -> &'static str {
    match shortcut {
        RangeShortcut::Today => "Today",
        RangeShortcut::Yesterday => "Yesterday",
        RangeShortcut::Last7Days => "Last 7 days",
        RangeShortcut::Last14Days => "Last 14 days",
        RangeShortcut::Last30Days => "Last 30 days",
        RangeShortcut::Last60Days => "Last 60 days",
        RangeShortcut::Last90Days => "Last 90 days",
        RangeShortcut::LastWeek => "Last week",
        RangeShortcut::LastMonth => "Last month",
        RangeShortcut::LastQuarter => "Last quarter",
        RangeShortcut::LastYear => "Last year",
        RangeShortcut::WeekToDate => "Week to date",
        RangeShortcut::MonthToDate => "Month to date",
        RangeShortcut::QuarterToDate => "Quarter to date",
        RangeShortcut::YearToDate => "Year to date",
        RangeShortcut::Rolling7Days => "Rolling 7 days",
        RangeShortcut::Rolling30Days => "Rolling 30 days",
        RangeShortcut::Rolling90Days => "Rolling 90 days",
        RangeShortcut::ThisWeek => "This week",
        RangeShortcut::ThisMonth => "This month",
        RangeShortcut::ThisQuarter => "This quarter",
        RangeShortcut::ThisYear => "This year",
        RangeShortcut::Next1Day => "Next 1 day",
        RangeShortcut::Next2Days => "Next 2 days",
        RangeShortcut::Next3Days => "Next 3 days",
        RangeShortcut::Next7Days => "Next 7 days",
        RangeShortcut::Next14Days => "Next 14 days",
        RangeShortcut::Next30Days => "Next 30 days",
        RangeShortcut::Next90Days => "Next 90 days",
        RangeShortcut::NextWeek => "Next week",
        RangeShortcut::NextMonth => "Next month",
        RangeShortcut::NextQuarter => "Next quarter",
        RangeShortcut::NextYear => "Next year",
        RangeShortcut::PreviousBusinessWeek => "Previous business week",
        RangeShortcut::PreviousBusinessMonth => "Previous business month",
        RangeShortcut::AllTime => "All time",
        RangeShortcut::Custom => "Custom",
    }
}

/// Locale-tag keyed collection of localizations.
///
/// Tags are normalized to lowercase with `-` separators, so `"fa_IR"`,
/// `"fa-IR"`, and `"fa-ir"` all address the same entry.
pub struct LocalizerRegistry {
    tables: HashMap<String, Localization>,
    default: Localization,
}

impl LocalizerRegistry {
    /// An empty registry that falls back to English.
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            default: Localization::english(),
        }
    }

    /// Registers a table under a locale tag, replacing any previous entry
    /// for the same normalized tag.
    pub fn register(&mut self, tag: &str, localization: Localization) {
        self.tables.insert(normalize_tag(tag), localization);
    }

    /// Resolves a tag: exact match, then primary subtag, then the default.
    pub fn resolve(&self, tag: &str) -> &Localization {
        let normalized = normalize_tag(tag);
        if let Some(found) = self.tables.get(&normalized) {
            return found;
        }
        if let Some((primary, _)) = normalized.split_once('-') {
            if let Some(found) = self.tables.get(primary) {
                return found;
            }
        }
        &self.default
    }
}

impl Default for LocalizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_ascii_lowercase().replace('_', "-")
}
