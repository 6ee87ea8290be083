mod consts;
mod io;
mod prelude;
mod types;

pub use consts::*;
pub use io::ReadError;
pub use types::{Field, Month, days_in_month, is_leap_year};

use crate::prelude::*;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use tracing::{debug, trace};

/// A proleptic Gregorian date and time of day with second precision.
///
/// Every constructor, setter and operator normalizes the value by carrying
/// overflow upward: seconds into minutes, minutes into hours, hours into
/// days, and days into months and years according to month lengths.
///
/// # Known limitation
///
/// Only positive overflow is carried. Negative seconds, minutes or hours
/// (for example from subtraction) are left as they are, and a day at or
/// below zero is never borrowed from the previous month. Such values are
/// kept, compared and rendered as stored.
///
/// # Overflow
///
/// Field arithmetic wraps on `i32` overflow in every build profile, so a
/// carry or day shift past `i32::MAX` lands near `i32::MIN` instead of
/// panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(
    fmt = "{}-{}-{} {}:{}:{}",
    year,
    month,
    day,
    hours,
    minutes,
    seconds
)]
pub struct DateTime {
    year: i32,
    month: Month,
    day: i32,
    hours: i32,
    minutes: i32,
    seconds: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(i32),

    /// Keyed lookup with an unknown field name.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// A field's text could not be read as an integer.
    #[error("Invalid {field}: {token:?} is not an integer")]
    InvalidInput { field: Field, token: String },

    /// Input ran out before this field was read.
    #[error("Unexpected end of input while reading {field}")]
    UnexpectedEof { field: Field },

    #[error("Invalid date-time format: {0}")]
    InvalidFormat(String),
}

impl DateTime {
    /// Creates a normalized value from its six fields, in constructor order.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidMonth` if `month` is outside `1..=12`.
    /// The month is validated as given and never carried into the year.
    pub fn new(
        day: i32,
        month: i32,
        year: i32,
        hours: i32,
        minutes: i32,
        seconds: i32,
    ) -> Result<Self, DateTimeError> {
        let month = Month::new(month)?;
        Ok(Self::from_parts(year, month, day, hours, minutes, seconds))
    }

    /// Creates a value at midnight on the given date
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidMonth` if `month` is outside `1..=12`.
    pub fn from_date(day: i32, month: i32, year: i32) -> Result<Self, DateTimeError> {
        Self::new(
            day,
            month,
            year,
            DEFAULT_HOURS,
            DEFAULT_MINUTES,
            DEFAULT_SECONDS,
        )
    }

    fn from_parts(
        year: i32,
        month: Month,
        day: i32,
        hours: i32,
        minutes: i32,
        seconds: i32,
    ) -> Self {
        let mut value = Self {
            year,
            month,
            day,
            hours,
            minutes,
            seconds,
        };
        value.normalize();
        value
    }

    /// Carries positive overflow up through the fields.
    ///
    /// Negative time fields and non-positive days are not corrected; see the
    /// type-level docs.
    fn normalize(&mut self) {
        if self.seconds >= SECONDS_PER_MINUTE {
            self.minutes = self.minutes.wrapping_add(self.seconds / SECONDS_PER_MINUTE);
            self.seconds %= SECONDS_PER_MINUTE;
            trace!(minutes = self.minutes, seconds = self.seconds, "carried seconds");
        }
        if self.minutes >= MINUTES_PER_HOUR {
            self.hours = self.hours.wrapping_add(self.minutes / MINUTES_PER_HOUR);
            self.minutes %= MINUTES_PER_HOUR;
            trace!(hours = self.hours, minutes = self.minutes, "carried minutes");
        }
        if self.hours >= HOURS_PER_DAY {
            self.day = self.day.wrapping_add(self.hours / HOURS_PER_DAY);
            self.hours %= HOURS_PER_DAY;
            trace!(day = self.day, hours = self.hours, "carried hours");
        }

        while self.day > self.month.days_in(self.year) {
            self.day -= self.month.days_in(self.year);
            let (next, rolled_over) = self.month.succ();
            self.month = next;
            if rolled_over {
                self.year = self.year.wrapping_add(1);
            }
            trace!(
                year = self.year,
                month = self.month.get(),
                day = self.day,
                "carried days into next month"
            );
        }
    }

    pub const fn day(&self) -> i32 {
        self.day
    }

    pub const fn month(&self) -> i32 {
        self.month.get()
    }

    /// Returns the validated Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn hours(&self) -> i32 {
        self.hours
    }

    pub const fn minutes(&self) -> i32 {
        self.minutes
    }

    pub const fn seconds(&self) -> i32 {
        self.seconds
    }

    /// Sets the day and renormalizes, which may carry into month and year.
    pub fn set_day(&mut self, day: i32) {
        self.day = day;
        self.normalize();
    }

    /// Sets the month and renormalizes. On error the value is unchanged.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidMonth` if `month` is outside `1..=12`.
    pub fn set_month(&mut self, month: i32) -> Result<(), DateTimeError> {
        self.month = Month::new(month)?;
        self.normalize();
        Ok(())
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
        self.normalize();
    }

    pub fn set_hours(&mut self, hours: i32) {
        self.hours = hours;
        self.normalize();
    }

    pub fn set_minutes(&mut self, minutes: i32) {
        self.minutes = minutes;
        self.normalize();
    }

    pub fn set_seconds(&mut self, seconds: i32) {
        self.seconds = seconds;
        self.normalize();
    }

    /// Returns the value of a single field
    pub const fn get(&self, field: Field) -> i32 {
        match field {
            Field::Year => self.year,
            Field::Month => self.month.get(),
            Field::Day => self.day,
            Field::Hours => self.hours,
            Field::Minutes => self.minutes,
            Field::Seconds => self.seconds,
        }
    }

    /// Looks a field up by its lowercase name
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidField` for names other than
    /// `day`, `month`, `year`, `hours`, `minutes` and `seconds`.
    pub fn field(&self, name: &str) -> Result<i32, DateTimeError> {
        name.parse::<Field>().map(|field| self.get(field))
    }

    /// Moves forward by `days` days and renormalizes.
    pub fn add_days(&mut self, days: i32) {
        self.day = self.day.wrapping_add(days);
        self.normalize();
    }

    /// Moves back by `days` days. A day at or below zero is left in place.
    pub fn subtract_days(&mut self, days: i32) {
        self.day = self.day.wrapping_sub(days);
        self.normalize();
    }

    /// Returns (year, month, day, hours, minutes, seconds), most significant first.
    pub const fn to_fields(&self) -> (i32, i32, i32, i32, i32, i32) {
        (
            self.year,
            self.month.get(),
            self.day,
            self.hours,
            self.minutes,
            self.seconds,
        )
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::from_parts(
            DEFAULT_YEAR,
            Month::default(),
            DEFAULT_DAY,
            DEFAULT_HOURS,
            DEFAULT_MINUTES,
            DEFAULT_SECONDS,
        )
    }
}

/// Adds the day and time fields of `rhs`. Month and year come from `self`
/// only, so `(a + b) - b` is generally not `a`.
impl Add for DateTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_parts(
            self.year,
            self.month,
            self.day.wrapping_add(rhs.day),
            self.hours.wrapping_add(rhs.hours),
            self.minutes.wrapping_add(rhs.minutes),
            self.seconds.wrapping_add(rhs.seconds),
        )
    }
}

/// Subtracts the day and time fields of `rhs`, keeping the month and year of
/// `self`. The result may hold negative fields.
impl Sub for DateTime {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_parts(
            self.year,
            self.month,
            self.day.wrapping_sub(rhs.day),
            self.hours.wrapping_sub(rhs.hours),
            self.minutes.wrapping_sub(rhs.minutes),
            self.seconds.wrapping_sub(rhs.seconds),
        )
    }
}

impl AddAssign<i32> for DateTime {
    fn add_assign(&mut self, days: i32) {
        self.add_days(days);
    }
}

impl SubAssign<i32> for DateTime {
    fn sub_assign(&mut self, days: i32) {
        self.subtract_days(days);
    }
}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_fields().cmp(&other.to_fields())
    }
}

impl TryFrom<(i32, i32, i32, i32, i32, i32)> for DateTime {
    type Error = DateTimeError;

    /// Tuple fields are in constructor order: (day, month, year, hours, minutes, seconds).
    fn try_from(value: (i32, i32, i32, i32, i32, i32)) -> Result<Self, Self::Error> {
        let (day, month, year, hours, minutes, seconds) = value;
        Self::new(day, month, year, hours, minutes, seconds)
    }
}

/// Parses one integer field, tagging failures with the field being read.
pub(crate) fn parse_component(field: Field, token: &str) -> Result<i32, DateTimeError> {
    token.parse::<i32>().map_err(|_| {
        debug!(%field, token, "rejected non-integer field");
        DateTimeError::InvalidInput {
            field,
            token: token.to_owned(),
        }
    })
}

impl FromStr for DateTime {
    type Err = DateTimeError;

    /// Parses `Y-M-D H:Min:S` and normalizes the result.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let halves: Vec<&str> = s.split_whitespace().collect();
        let [date, time] = halves.as_slice() else {
            return Err(DateTimeError::InvalidFormat(format!(
                "expected date and time separated by '{DATE_TIME_SEPARATOR}': {s:?}"
            )));
        };

        // The day is last, so it may carry its own sign: `2024-1--14`.
        let date_parts: Vec<&str> = date.splitn(3, DATE_SEPARATOR).collect();
        let [year, month, day] = date_parts.as_slice() else {
            return Err(DateTimeError::InvalidFormat(format!(
                "expected 3 '{DATE_SEPARATOR}'-separated date parts, found {}",
                date_parts.len()
            )));
        };

        let time_parts: Vec<&str> = time.split(TIME_SEPARATOR).collect();
        let [hours, minutes, seconds] = time_parts.as_slice() else {
            return Err(DateTimeError::InvalidFormat(format!(
                "expected 3 '{TIME_SEPARATOR}'-separated time parts, found {}",
                time_parts.len()
            )));
        };

        Self::new(
            parse_component(Field::Day, day)?,
            parse_component(Field::Month, month)?,
            parse_component(Field::Year, year)?,
            parse_component(Field::Hours, hours)?,
            parse_component(Field::Minutes, minutes)?,
            parse_component(Field::Seconds, seconds)?,
        )
    }
}

impl serde::Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
