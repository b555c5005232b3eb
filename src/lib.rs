mod arith;
mod calendar;
mod consts;
mod prelude;

pub use arith::{ArithError, factorial, power, sum};
pub use calendar::{days_in_month, days_in_prev_month, is_leap_year};
pub use consts::*;

use crate::prelude::*;
use calendar::Fields;
use std::cmp::Ordering;
use std::str::FromStr;

/// A day/month/year triple that keeps itself inside calendar ranges.
///
/// Construction never fails: out-of-range days and months are carried into
/// the next field until `1 <= month <= 12` and
/// `1 <= day <= days_in_month(month, year)`. Values are immutable; arithmetic
/// returns a new date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct CalendarDate {
    day: i32,
    month: i32,
    year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid number: {_0}")]
    InvalidNumber(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from raw components, normalizing any out-of-range values.
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        let Fields { day, month, year } = Fields::new(day, month, year).normalize();
        Self { day, month, year }
    }

    /// Returns the date `days` days later (earlier when negative).
    ///
    /// The day sum saturates at the `i32` bounds.
    #[must_use]
    pub const fn offset(&self, days: i32) -> Self {
        Self::new(self.day.saturating_add(days), self.month, self.year)
    }

    /// Returns the day of the month (1..=31)
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns `(day, month, year)`
    pub const fn components(&self) -> (i32, i32, i32) {
        (self.day, self.month, self.year)
    }
}

impl From<(i32, i32, i32)> for CalendarDate {
    fn from((day, month, year): (i32, i32, i32)) -> Self {
        Self::new(day, month, year)
    }
}

impl From<CalendarDate> for (i32, i32, i32) {
    fn from(date: CalendarDate) -> Self {
        date.components()
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Split from the right so a leading sign stays with the year.
        let parts: Vec<&str> = trimmed.rsplitn(3, DATE_SEPARATOR).map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let year = Self::parse_component(year)?;
        let month = Self::parse_component(month)?;
        let day = Self::parse_component(day)?;
        Ok(Self::new(day, month, year))
    }
}

impl CalendarDate {
    /// Helper to parse i32 with better error messages
    fn parse_component(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidNumber(s.to_owned()))
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Checked at build time.
const _: () = {
    let later = CalendarDate::new(23, 8, 2020).offset(365);
    assert!(later.day() == 23 && later.month() == 8 && later.year() == 2021);

    let leap = CalendarDate::new(29, 2, 2100);
    assert!(leap.day() == 29 && leap.month() == 2);
};
