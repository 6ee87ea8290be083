use crate::DateTimeError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, DEFAULT_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Month(u8);

impl Month {
    /// Creates a new Month, validating that it lies in `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidMonth` for any other value.
    pub fn new(value: i32) -> Result<Self, DateTimeError> {
        if !(JANUARY..=MAX_MONTH).contains(&value) {
            return Err(DateTimeError::InvalidMonth(value));
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| DateTimeError::InvalidMonth(value))
    }

    /// Returns the month value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0 as i32
    }

    /// Number of days in this month of `year`.
    pub const fn days_in(self, year: i32) -> i32 {
        if self.get() == FEBRUARY && is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self.0 as usize]
        }
    }

    /// Returns the following month and whether the year rolled over.
    pub(crate) const fn succ(self) -> (Self, bool) {
        if self.get() == DECEMBER {
            (Self(JANUARY as u8), true)
        } else {
            (Self(self.0 + 1), false)
        }
    }
}

const _: () = assert!(DEFAULT_MONTH >= JANUARY && DEFAULT_MONTH <= MAX_MONTH);

impl Default for Month {
    fn default() -> Self {
        Self(DEFAULT_MONTH as u8)
    }
}

impl TryFrom<i32> for Month {
    type Error = DateTimeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for i32 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one of the six fields of a [`DateTime`](crate::DateTime).
///
/// Parsing from text accepts the lowercase field names only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Year,
    Month,
    Day,
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    /// All fields, most significant first. This is both the comparison
    /// priority and the order fields are read from a stream.
    pub const ALL: [Self; 6] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
    ];

    /// The lowercase name used for keyed lookup
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| DateTimeError::InvalidField(s.to_owned()))
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `DateTimeError::InvalidMonth` if `month` is outside `1..=12`.
/// Out-of-range months are never clamped or wrapped.
pub fn days_in_month(month: i32, year: i32) -> Result<i32, DateTimeError> {
    Month::new(month).map(|m| m.days_in(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert_eq!(Month::new(0), Err(DateTimeError::InvalidMonth(0)));
        assert_eq!(Month::new(13), Err(DateTimeError::InvalidMonth(13)));
        assert_eq!(Month::new(-1), Err(DateTimeError::InvalidMonth(-1)));
        assert_eq!(Month::new(268), Err(DateTimeError::InvalidMonth(268)));
    }

    #[test]
    fn test_month_default_is_default_month() {
        assert_eq!(Month::default().get(), DEFAULT_MONTH);
    }

    #[test]
    fn test_month_succ() {
        let (next, carried) = Month::new(11).unwrap().succ();
        assert_eq!((next.get(), carried), (12, false));

        let (next, carried) = Month::new(12).unwrap().succ();
        assert_eq!((next.get(), carried), (1, true));
    }

    #[test]
    fn test_month_try_from_and_into() {
        let month: Month = 8.try_into().unwrap();
        let value: i32 = month.into();
        assert_eq!(value, 8);
        assert_eq!(month.to_string(), "8");

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");
        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.to_string(), field.name());
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn test_field_display_and_serde_agree_with_name() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{field}\""));
            assert_eq!(serde_json::from_str::<Field>(&json).unwrap(), field);
        }
    }

    #[test]
    fn test_field_rejects_unknown_names() {
        for name in ["foo", "Day", "YEAR", "hour", "", " day"] {
            assert_eq!(
                name.parse::<Field>(),
                Err(DateTimeError::InvalidField(name.to_owned()))
            );
        }
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "year zero is divisible by 400",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative multiple of 4",
            },
            TestCase {
                year: -100,
                is_leap: false,
                description: "negative century",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(month, 2024), Ok(31), "Month {month}");
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(month, 2024), Ok(30), "Month {month}");
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2, 2023), Ok(28));
        assert_eq!(days_in_month(2, 1900), Ok(28));
        assert_eq!(days_in_month(2, 2024), Ok(29));
        assert_eq!(days_in_month(2, 2000), Ok(29));
    }

    #[test]
    fn test_days_in_month_invalid_month() {
        assert_eq!(days_in_month(13, 2024), Err(DateTimeError::InvalidMonth(13)));
        assert_eq!(days_in_month(0, 2024), Err(DateTimeError::InvalidMonth(0)));
    }
}
