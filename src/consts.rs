/// Default day used when a value is built without one
pub const DEFAULT_DAY: i32 = 1;
/// Default month (January)
pub const DEFAULT_MONTH: i32 = JANUARY;
/// Default year, the Unix epoch year
pub const DEFAULT_YEAR: i32 = 1970;
/// Default hours
pub const DEFAULT_HOURS: i32 = 0;
/// Default minutes
pub const DEFAULT_MINUTES: i32 = 0;
/// Default seconds
pub const DEFAULT_SECONDS: i32 = 0;

/// Maximum valid month (December)
pub const MAX_MONTH: i32 = 12;

/// Month number for January
pub const JANUARY: i32 = 1;
/// Month number for February
pub const FEBRUARY: i32 = 2;
/// Month number for December
pub const DECEMBER: i32 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i32 = 29;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [i32; 13] = [
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

/// Seconds carried into one minute
pub const SECONDS_PER_MINUTE: i32 = 60;
/// Minutes carried into one hour
pub const MINUTES_PER_HOUR: i32 = 60;
/// Hours carried into one day
pub const HOURS_PER_DAY: i32 = 24;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator between the date and time halves
pub const DATE_TIME_SEPARATOR: char = ' ';
