//! Range selection state machine.
//!
//! A [`RangePicker`] holds a committed range and an in-flight selection
//! session, and reports state changes through an optional event sink.
//! Notifications fire synchronously, after the corresponding mutation has
//! been applied, so a sink observing an event always sees the post-event
//! state.

use tracing::{debug, trace};

use crate::config::PickerConfig;
use crate::localize::Localization;
use crate::range::DateRange;
use crate::recent::RecentRanges;
use crate::resolve::resolve;
use crate::shortcut::RangeShortcut;
use crate::types::PlainDate;
use crate::validate::{RangeValidity, validate};

/// State-change notifications, in the order they fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    Opened,
    Closed,
    /// The committed range changed, by apply, clear, or external assignment.
    RangeChanged(Option<DateRange>),
    /// The in-flight preview changed.
    PreviewChanged(Option<DateRange>),
    /// A valid preview was committed.
    Applied(DateRange),
    Cancelled,
    Cleared,
}

/// Receives picker events synchronously after each state mutation.
pub type EventSink = Box<dyn FnMut(&PickerEvent)>;

/// The in-flight selection: click pair, preview, and its validity.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSession {
    first_click: Option<PlainDate>,
    second_click: Option<PlainDate>,
    is_selecting: bool,
    preview: Option<DateRange>,
    validity: RangeValidity,
    selected_preset: Option<RangeShortcut>,
}

impl SelectionSession {
    pub const fn first_click(&self) -> Option<PlainDate> {
        self.first_click
    }

    pub const fn second_click(&self) -> Option<PlainDate> {
        self.second_click
    }

    /// Whether the picker is waiting for calendar clicks, as opposed to
    /// displaying a range mirrored from a preset or the committed value.
    pub const fn is_selecting(&self) -> bool {
        self.is_selecting
    }

    pub const fn preview(&self) -> Option<DateRange> {
        self.preview
    }

    pub const fn validity(&self) -> RangeValidity {
        self.validity
    }

    pub const fn selected_preset(&self) -> Option<RangeShortcut> {
        self.selected_preset
    }
}

/// Semantic tags for a single calendar day, for a host to style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayClassification {
    pub selected: bool,
    pub range_start: bool,
    pub range_end: bool,
    pub in_range: bool,
    pub today: bool,
    pub disabled: bool,
}

/// The date-range picker state machine.
pub struct RangePicker {
    config: PickerConfig,
    session: SelectionSession,
    committed: Option<DateRange>,
    recent: RecentRanges,
    is_open: bool,
    sink: Option<EventSink>,
}

impl RangePicker {
    pub fn new(config: PickerConfig) -> Self {
        let mut picker = Self {
            config,
            session: SelectionSession::default(),
            committed: None,
            recent: RecentRanges::new(),
            is_open: false,
            sink: None,
        };
        picker.reset_preview();
        picker
    }

    /// Installs the event sink, replacing any previous one.
    pub fn set_sink(&mut self, sink: EventSink) {
        self.sink = Some(sink);
    }

    pub fn clear_sink(&mut self) {
        self.sink = None;
    }

    // Observables

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub const fn session(&self) -> &SelectionSession {
        &self.session
    }

    pub const fn preview_range(&self) -> Option<DateRange> {
        self.session.preview
    }

    pub const fn committed_range(&self) -> Option<DateRange> {
        self.committed
    }

    pub const fn validity(&self) -> RangeValidity {
        self.session.validity
    }

    pub const fn is_preview_valid(&self) -> bool {
        self.session.validity.is_valid()
    }

    pub const fn selected_preset(&self) -> Option<RangeShortcut> {
        self.session.selected_preset
    }

    pub const fn recent_ranges(&self) -> &RecentRanges {
        &self.recent
    }

    pub fn active_presets(&self) -> Vec<RangeShortcut> {
        self.config.active_presets()
    }

    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn today(&self) -> PlainDate {
        self.config.clock.today()
    }

    /// The localized message for the current constraint violation, if the
    /// preview is complete and invalid.
    pub fn validation_message(&self, localization: &Localization) -> Option<String> {
        let violation = self.session.validity.violation()?;
        Some(localization.violation_message(violation))
    }

    // Transitions

    /// Opens the picker. The preview is re-seeded from the committed range
    /// and the matching preset is re-detected.
    pub fn open(&mut self) {
        self.is_open = true;
        self.reset_preview();
        debug!(committed = ?self.committed, "picker opened");
        self.emit(PickerEvent::Opened);
    }

    pub fn close(&mut self) {
        self.is_open = false;
        debug!("picker closed");
        self.emit(PickerEvent::Closed);
    }

    /// Commits the preview. A silent no-op unless the preview is complete
    /// and valid.
    pub fn apply(&mut self) {
        let Some(range) = self.session.preview else {
            return;
        };
        if !self.session.validity.is_valid() {
            return;
        }
        self.commit(Some(range));
        if self.config.remember_recent_ranges
            && self.session.selected_preset == Some(RangeShortcut::Custom)
        {
            self.recent.add(range);
        }
        debug!(%range, "range applied");
        self.emit(PickerEvent::Applied(range));
        self.close();
    }

    /// Discards the preview, restoring it from the committed range, and
    /// closes.
    pub fn cancel(&mut self) {
        self.reset_preview();
        self.emit(PickerEvent::Cancelled);
        self.close();
    }

    /// Clears the committed range. Closes the picker only if it was open.
    pub fn clear(&mut self) {
        self.commit(None);
        self.reset_preview();
        self.emit(PickerEvent::Cleared);
        if self.is_open {
            self.close();
        }
    }

    /// Selects a preset. A non-Custom preset that resolves to a valid
    /// range replaces the preview and mirrors the range into the click
    /// pair; one that resolves invalid leaves the preview untouched.
    /// Custom clears the preview for manual selection.
    pub fn select_preset(&mut self, preset: RangeShortcut) {
        self.session.selected_preset = Some(preset);
        if preset == RangeShortcut::Custom {
            self.session.preview = None;
            self.session.validity = RangeValidity::Incomplete;
            self.reset_selection_state();
        } else if let Some(range) = self.resolve_shortcut(preset) {
            let validity = self.check(range);
            if validity.is_valid() {
                self.session.preview = Some(range);
                self.session.validity = validity;
                self.mirror_preview_into_clicks();
            }
        }
        debug!(%preset, preview = ?self.session.preview, "preset selected");
        self.emit(PickerEvent::PreviewChanged(self.session.preview));
    }

    /// Handles a calendar day click. The first click anchors the range and
    /// marks the selection Custom; the second completes the preview,
    /// swapping the pair into chronological order when clicked backwards.
    pub fn day_clicked(&mut self, date: PlainDate) {
        match (self.session.first_click, self.session.second_click) {
            (Some(first), None) => {
                let (start, end) = if first > date { (date, first) } else { (first, date) };
                self.session.first_click = Some(start);
                self.session.second_click = Some(end);
                let range = DateRange::complete(start, end);
                self.session.preview = Some(range);
                self.session.validity = self.check(range);
                debug!(%range, validity = ?self.session.validity, "range selected");
                self.emit(PickerEvent::PreviewChanged(Some(range)));
            }
            // first click, or restart after a completed pair
            _ => {
                self.session.second_click = None;
                self.session.first_click = Some(date);
                self.session.is_selecting = true;
                self.session.selected_preset = Some(RangeShortcut::Custom);
            }
        }
    }

    /// Assigns the committed range from outside the picker, firing
    /// `RangeChanged` when the value differs.
    pub fn set_range(&mut self, range: Option<DateRange>) {
        self.commit(range);
    }

    // Day classification

    /// Whether a day is unselectable under the configured constraints.
    pub fn is_day_disabled(&self, date: PlainDate) -> bool {
        let constraints = &self.config.constraints;
        if constraints.min_date.is_some_and(|min| date < min) {
            return true;
        }
        if constraints.max_date.is_some_and(|max| date > max) {
            return true;
        }
        let today = self.today();
        (constraints.past_only && date > today) || (constraints.future_only && date < today)
    }

    /// Semantic tags for one day. An in-progress click pair takes
    /// precedence over the preview range; while the second click is
    /// pending, days after the anchor form a tentative span.
    pub fn classify_day(&self, date: PlainDate) -> DayClassification {
        let mut class = DayClassification {
            today: date == self.today(),
            disabled: self.is_day_disabled(date),
            ..DayClassification::default()
        };

        let first = self.session.first_click;
        let second = self.session.second_click;
        if first.is_some() || second.is_some() {
            match (first, second) {
                (Some(start), Some(end)) => {
                    if start < date && date < end {
                        class.in_range = true;
                    } else if date == start && date == end {
                        class.selected = true;
                    } else if date == start {
                        class.selected = true;
                        class.range_start = true;
                    } else if date == end {
                        class.selected = true;
                        class.range_end = true;
                    }
                }
                (Some(anchor), None) => {
                    if date == anchor {
                        class.selected = true;
                        class.range_start = true;
                    } else if anchor < date {
                        class.in_range = true;
                    }
                }
                _ => {}
            }
        } else if let Some(range) = self.session.preview {
            if let (Some(start), Some(end)) = range.endpoints() {
                if start < date && date < end {
                    class.in_range = true;
                } else if date == start && date == end {
                    class.selected = true;
                } else if date == start {
                    class.selected = true;
                    class.range_start = true;
                } else if date == end {
                    class.selected = true;
                    class.range_end = true;
                }
            }
        }

        class
    }

    // Internals

    fn emit(&mut self, event: PickerEvent) {
        trace!(?event, "dispatching picker event");
        if let Some(sink) = self.sink.as_mut() {
            sink(&event);
        }
    }

    fn commit(&mut self, range: Option<DateRange>) {
        if self.committed != range {
            self.committed = range;
            self.emit(PickerEvent::RangeChanged(range));
        }
    }

    fn check(&self, range: DateRange) -> RangeValidity {
        validate(range, &self.config.constraints, self.today())
    }

    fn check_opt(&self, range: Option<DateRange>) -> RangeValidity {
        range.map_or(RangeValidity::Incomplete, |range| self.check(range))
    }

    fn resolve_shortcut(&self, shortcut: RangeShortcut) -> Option<DateRange> {
        resolve(
            shortcut,
            self.today(),
            self.config.calendar.as_ref(),
            self.config.first_day_of_week(),
            self.config.constraints.future_only,
        )
    }

    /// Reverse-matches a range to the first shortcut resolving to it, in
    /// declaration order. A range no shortcut produces is Custom.
    fn preset_for_range(&self, range: Option<DateRange>) -> Option<RangeShortcut> {
        let range = range?;
        for shortcut in RangeShortcut::ALL {
            if shortcut == RangeShortcut::Custom {
                continue;
            }
            if self.resolve_shortcut(shortcut) == Some(range) {
                return Some(shortcut);
            }
        }
        Some(RangeShortcut::Custom)
    }

    fn reset_preview(&mut self) {
        self.session.preview = self.committed;
        self.session.validity = self.check_opt(self.committed);
        self.session.selected_preset = self.preset_for_range(self.committed);
        self.reset_selection_state();
    }

    fn reset_selection_state(&mut self) {
        self.session.first_click = None;
        self.session.second_click = None;
        self.session.is_selecting = true;
    }

    fn mirror_preview_into_clicks(&mut self) {
        if let Some(range) = self.session.preview {
            if range.start().is_some() {
                self.session.first_click = range.start();
                self.session.second_click = range.end();
                self.session.is_selecting = false;
            }
        }
    }
}
