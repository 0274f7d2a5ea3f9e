use crate::consts::{
    MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR, PERSIAN_CYCLE_DAYS, PERSIAN_CYCLE_LEAPS,
    PERSIAN_CYCLE_YEARS, PERSIAN_EPOCH_DAY, PERSIAN_ESFAND_DAYS, PERSIAN_FIRST_HALF_DAYS,
    PERSIAN_LEAP_PREFIX, PERSIAN_LEAP_THRESHOLD, PERSIAN_LONG_MONTH_DAYS, PERSIAN_MAX_YEAR,
    PERSIAN_SHORT_MONTH_DAYS,
};
use crate::types::{DateError, PlainDate, Weekday, days_from_civil, days_in_month};

/// A (year, month, day) triple interpreted in a specific calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// A pluggable calendar system: month lengths, leap rules, and supported
/// date bounds. Injected into the picker so period math never assumes
/// Gregorian rules.
pub trait Calendar: Send + Sync {
    /// Earliest date this calendar can represent.
    fn min_supported(&self) -> PlainDate;

    /// Latest date this calendar can represent.
    fn max_supported(&self) -> PlainDate;

    /// Calendar fields of a date. The date must lie in the supported span.
    fn to_fields(&self, date: PlainDate) -> CalendarFields;

    /// Date for a field triple, validating each component.
    ///
    /// # Errors
    /// Returns a `DateError` variant naming the first invalid component.
    fn from_fields(&self, year: i32, month: u8, day: u8) -> Result<PlainDate, DateError>;

    /// Length of a month in this calendar.
    fn days_in_month(&self, year: i32, month: u8) -> u8;

    /// Month count of a year. Both built-in calendars have twelve.
    fn months_in_year(&self, year: i32) -> u8 {
        let _ = year;
        MAX_MONTH
    }

    /// The conventional first day of the week for this calendar's cultures.
    /// Picker configuration may override it.
    fn first_day_of_week(&self) -> Weekday;

    /// Adds whole months, clamping the day to the target month's length and
    /// the result to the supported span.
    fn add_months(&self, date: PlainDate, months: i32) -> PlainDate {
        let fields = self.to_fields(date);
        let per_year = i64::from(self.months_in_year(fields.year));
        let total =
            i64::from(fields.year) * per_year + i64::from(fields.month) - 1 + i64::from(months);
        let year = total.div_euclid(per_year);
        let min_year = i64::from(self.to_fields(self.min_supported()).year);
        let max_year = i64::from(self.to_fields(self.max_supported()).year);
        if year < min_year {
            return self.min_supported();
        }
        if year > max_year {
            return self.max_supported();
        }
        #[allow(clippy::cast_possible_truncation)]
        let year = year as i32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = (total.rem_euclid(per_year) + 1) as u8;
        let day = fields.day.min(self.days_in_month(year, month));
        match self.from_fields(year, month, day) {
            Ok(result) => self.clamp(result),
            Err(_) => {
                if months < 0 {
                    self.min_supported()
                } else {
                    self.max_supported()
                }
            }
        }
    }

    /// Adds whole years through the calendar's leap rules, with the same
    /// clamping policy as [`Calendar::add_months`].
    fn add_years(&self, date: PlainDate, years: i32) -> PlainDate {
        let fields = self.to_fields(date);
        self.add_months(
            date,
            years.saturating_mul(i32::from(self.months_in_year(fields.year))),
        )
    }

    /// Clamps a date into the supported span.
    fn clamp(&self, date: PlainDate) -> PlainDate {
        date.clamp(self.min_supported(), self.max_supported())
    }
}

/// Proleptic Gregorian calendar, years 1 through 9999.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

const GREGORIAN_MIN: PlainDate =
    PlainDate::from_epoch_days(days_from_civil(MIN_YEAR, 1, MIN_DAY));
const GREGORIAN_MAX: PlainDate = PlainDate::from_epoch_days(days_from_civil(MAX_YEAR, 12, 31));

impl Calendar for Gregorian {
    fn min_supported(&self) -> PlainDate {
        GREGORIAN_MIN
    }

    fn max_supported(&self) -> PlainDate {
        GREGORIAN_MAX
    }

    fn to_fields(&self, date: PlainDate) -> CalendarFields {
        let (year, month, day) = date.to_ymd();
        CalendarFields { year, month, day }
    }

    fn from_fields(&self, year: i32, month: u8, day: u8) -> Result<PlainDate, DateError> {
        PlainDate::from_ymd(year, month, day)
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        days_in_month(year, month)
    }

    fn first_day_of_week(&self) -> Weekday {
        Weekday::Monday
    }
}

/// Solar Hijri (Persian) calendar using the arithmetic 33-year leap cycle,
/// years 1 through 3000. Weeks start on Saturday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Persian;

pub(crate) const fn is_persian_leap_year(year: i32) -> bool {
    (25 * year + 11).rem_euclid(PERSIAN_CYCLE_YEARS) < PERSIAN_LEAP_THRESHOLD
}

/// Days from 1 Farvardin 1 to 1 Farvardin `year`.
const fn persian_days_before_year(year: i32) -> i32 {
    let prior = year - 1;
    let cycles = prior.div_euclid(PERSIAN_CYCLE_YEARS);
    let position = prior.rem_euclid(PERSIAN_CYCLE_YEARS);
    let leaps = cycles * PERSIAN_CYCLE_LEAPS + PERSIAN_LEAP_PREFIX[position as usize] as i32;
    prior * 365 + leaps
}

/// Days from 1 Farvardin to the first of `month` within one year.
const fn persian_days_before_month(month: u8) -> i32 {
    let m = month as i32;
    if m <= 7 {
        (m - 1) * PERSIAN_LONG_MONTH_DAYS as i32
    } else {
        PERSIAN_FIRST_HALF_DAYS + (m - 7) * PERSIAN_SHORT_MONTH_DAYS as i32
    }
}

const PERSIAN_MIN: PlainDate = PlainDate::from_epoch_days(PERSIAN_EPOCH_DAY);
const PERSIAN_MAX: PlainDate = PlainDate::from_epoch_days(
    PERSIAN_EPOCH_DAY + persian_days_before_year(PERSIAN_MAX_YEAR + 1) - 1,
);

impl Calendar for Persian {
    fn min_supported(&self) -> PlainDate {
        PERSIAN_MIN
    }

    fn max_supported(&self) -> PlainDate {
        PERSIAN_MAX
    }

    fn to_fields(&self, date: PlainDate) -> CalendarFields {
        let days = date
            .epoch_days()
            .saturating_sub(PERSIAN_EPOCH_DAY)
            .clamp(0, PERSIAN_MAX.epoch_days() - PERSIAN_EPOCH_DAY);

        // First-guess year from the mean cycle length, then settle.
        #[allow(clippy::cast_possible_truncation)]
        let mut year = (i64::from(days) * i64::from(PERSIAN_CYCLE_YEARS) / PERSIAN_CYCLE_DAYS)
            as i32
            + 1;
        while days < persian_days_before_year(year) {
            year -= 1;
        }
        while days >= persian_days_before_year(year + 1) {
            year += 1;
        }

        let doy = days - persian_days_before_year(year);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = if doy < PERSIAN_FIRST_HALF_DAYS {
            (doy / PERSIAN_LONG_MONTH_DAYS as i32 + 1) as u8
        } else {
            ((doy - PERSIAN_FIRST_HALF_DAYS) / PERSIAN_SHORT_MONTH_DAYS as i32 + 7) as u8
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let day = (doy - persian_days_before_month(month) + 1) as u8;
        CalendarFields { year, month, day }
    }

    fn from_fields(&self, year: i32, month: u8, day: u8) -> Result<PlainDate, DateError> {
        if !(MIN_YEAR..=PERSIAN_MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth { year, month });
        }
        if day < MIN_DAY || day > self.days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        let days = persian_days_before_year(year)
            + persian_days_before_month(month)
            + i32::from(day)
            - 1;
        Ok(PlainDate::from_epoch_days(PERSIAN_EPOCH_DAY + days))
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        debug_assert!(month != 0 && month <= MAX_MONTH);

        match month {
            1..=6 => PERSIAN_LONG_MONTH_DAYS,
            7..=11 => PERSIAN_SHORT_MONTH_DAYS,
            _ => {
                if is_persian_leap_year(year) {
                    PERSIAN_ESFAND_DAYS + 1
                } else {
                    PERSIAN_ESFAND_DAYS
                }
            }
        }
    }

    fn first_day_of_week(&self) -> Weekday {
        Weekday::Saturday
    }
}
