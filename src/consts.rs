/// Minimum valid Gregorian year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for period starts
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a full 400-year Gregorian era
pub(crate) const DAYS_PER_ERA: i32 = 146_097;
/// Years per Gregorian era
pub(crate) const ERA_YEARS: i32 = 400;
/// Days from 0000-03-01 to the Unix epoch (1970-01-01)
pub(crate) const EPOCH_OFFSET: i32 = 719_468;
/// Monday-first weekday index of the Unix epoch day (a Thursday)
pub(crate) const EPOCH_WEEKDAY: i32 = 3;

/// Days in a week
pub const DAYS_PER_WEEK: i32 = 7;
/// Days in a Monday-to-Friday business week
pub const BUSINESS_DAYS_PER_WEEK: i32 = 5;
/// Months in a quarter
pub const MONTHS_PER_QUARTER: u8 = 3;

/// Capacity of the most-recently-used custom range cache
pub const RECENT_RANGES_CAP: usize = 3;

/// Seconds in a civil day, used by the system clock
pub(crate) const SECONDS_PER_DAY: u64 = 86_400;

/// Placeholder substituted into localized message templates
pub const TEMPLATE_PLACEHOLDER: &str = "{0}";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

/// Epoch day (days since 1970-01-01) of 1 Farvardin 1 in the Solar Hijri calendar
pub(crate) const PERSIAN_EPOCH_DAY: i32 = -492_268;
/// Maximum supported Solar Hijri year (inclusive)
pub(crate) const PERSIAN_MAX_YEAR: i32 = 3000;
/// Length of the arithmetic Solar Hijri leap cycle in years
pub(crate) const PERSIAN_CYCLE_YEARS: i32 = 33;
/// Leap years per 33-year Solar Hijri cycle
pub(crate) const PERSIAN_CYCLE_LEAPS: i32 = 8;
/// A Solar Hijri year is leap when (25*year + 11) mod 33 falls below this
pub(crate) const PERSIAN_LEAP_THRESHOLD: i32 = 8;
/// Days per 33-year Solar Hijri cycle (33*365 + 8)
pub(crate) const PERSIAN_CYCLE_DAYS: i64 = 12_053;
/// Leap-year count at or before each position of the 33-year cycle
/// (positions 1, 5, 9, 13, 17, 22, 26 and 30 are leap)
pub(crate) const PERSIAN_LEAP_PREFIX: [u8; 34] = [
    0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 7, 8,
    8, 8, 8,
];
/// Days in Farvardin through Shahrivar (months 1-6)
pub(crate) const PERSIAN_LONG_MONTH_DAYS: u8 = 31;
/// Days in Mehr through Bahman (months 7-11)
pub(crate) const PERSIAN_SHORT_MONTH_DAYS: u8 = 30;
/// Days in Esfand (month 12) outside leap years
pub(crate) const PERSIAN_ESFAND_DAYS: u8 = 29;
/// Days in the first six Solar Hijri months combined
pub(crate) const PERSIAN_FIRST_HALF_DAYS: i32 = 186;
