mod calendar;
mod config;
mod consts;
mod localize;
mod period;
mod picker;
mod prelude;
mod range;
mod recent;
mod resolve;
mod shortcut;
mod types;
mod validate;

pub use calendar::{Calendar, CalendarFields, Gregorian, Persian};
pub use config::{Clock, FixedClock, PickerConfig, SystemClock};
pub use consts::*;
pub use localize::{Localization, LocalizationError, LocalizerRegistry, TextKey};
pub use period::{
    end_of_month, end_of_quarter, end_of_week, end_of_year, quarter_of, start_of_month,
    start_of_quarter, start_of_week, start_of_year,
};
pub use picker::{DayClassification, EventSink, PickerEvent, RangePicker, SelectionSession};
pub use range::DateRange;
pub use recent::RecentRanges;
pub use resolve::resolve;
pub use shortcut::RangeShortcut;
pub use types::{DateError, PlainDate, Weekday};
pub use validate::{ConstraintViolation, RangeConstraints, RangeValidity, validate};
