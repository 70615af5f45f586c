//! Bikram Sambat (BS) calendar engine.
//!
//! Converts between Gregorian (AD) dates and the Nepali Bikram Sambat
//! calendar, and derives how much of the current BS year has elapsed.
//!
//! BS month lengths vary from year to year without a closed-form rule, so the
//! engine is driven by a compiled-in month-length table covering BS
//! [`MIN_YEAR`]..=[`MAX_YEAR`], anchored at [`EPOCH_AD`] (AD 1913-04-13 is
//! BS 1970-01-01). Dates outside that span are errors, never extrapolated.
//!
//! ```
//! use sambat::BsDate;
//!
//! let date = sambat::from_gregorian(2026, 1, 22).unwrap();
//! assert_eq!(date, BsDate::new(2082, 10, 9).unwrap());
//! assert_eq!(date.format(), "Magh 09, 2082");
//! assert_eq!(date.progress_text(), "81d left / 77%");
//! assert_eq!(date.to_ad().unwrap().to_string(), "2026-01-22");
//! ```

mod consts;
mod convert;
mod error;
mod prelude;
mod progress;
mod table;
mod types;

pub use consts::*;
pub use convert::{from_ad, from_gregorian, to_ad, to_gregorian, today};
pub use error::CalendarError;
pub use progress::{
    DayState, YearProgress, day_of_year, days_remaining, progress_text, year_progress,
};
pub use table::{days_in_month, days_in_year, month_lengths};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A validated Bikram Sambat date.
///
/// The day is always within the tabulated length of its month, so every
/// derived value (month name, day of year, progress) is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct BsDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "{_0}")]
    Calendar(CalendarError),
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Calendar(err) = self {
            Some(err)
        } else {
            None
        }
    }
}

impl From<CalendarError> for ParseError {
    fn from(err: CalendarError) -> Self {
        Self::Calendar(err)
    }
}

impl BsDate {
    /// Creates a date from raw BS components, validating each against the table.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange`, `MonthOutOfRange` or
    /// `DayOutOfRange` for components outside the tabulated calendar.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::from_parts(Year::new(year)?, Month::new(month)?, day)
    }

    /// Creates a date from an already validated year and month.
    ///
    /// # Errors
    /// Returns `CalendarError::DayOutOfRange` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: u8) -> Result<Self, CalendarError> {
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Baisakh 1 of `year`
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if `year` is not tabulated.
    pub fn first_of_year(year: u16) -> Result<Self, CalendarError> {
        Self::new(year, BAISAKH, MIN_DAY)
    }

    /// The last day of Chaitra in `year`
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if `year` is not tabulated.
    pub fn last_of_year(year: u16) -> Result<Self, CalendarError> {
        Self::new(year, CHAITRA, days_in_month(year, CHAITRA)?)
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1 = Baisakh)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns `(year, month, day)`
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    pub const fn month_name_nepali(&self) -> &'static str {
        self.month.nepali_name()
    }

    /// Formats as `<MonthName> <DD>, <YYYY>`, e.g. `Magh 09, 2082`.
    pub fn format(&self) -> String {
        format!("{} {:02}, {}", self.month_name(), self.day(), self.year())
    }

    /// Same layout as [`BsDate::format`] with the Devanagari month name.
    pub fn format_nepali(&self) -> String {
        format!("{} {:02}, {}", self.month_name_nepali(), self.day(), self.year())
    }

    /// The following day, or `None` after the last tabulated day
    pub fn next_day(&self) -> Option<Self> {
        if self.day() < table::month_length(self.year, self.month) {
            return Self::from_parts(self.year, self.month, self.day() + 1).ok();
        }
        let Some(month) = self.month.next() else {
            let year = self.year.next()?;
            return Self::new(year.get(), BAISAKH, MIN_DAY).ok();
        };
        Self::from_parts(self.year, month, MIN_DAY).ok()
    }

    pub fn day_of_year(&self) -> u16 {
        progress::day_of_year(self)
    }

    pub fn days_remaining(&self) -> u16 {
        progress::days_remaining(self)
    }

    pub fn year_progress(&self) -> u8 {
        progress::year_progress(self)
    }

    pub fn progress(&self) -> YearProgress {
        YearProgress::of(self)
    }

    pub fn progress_text(&self) -> String {
        progress::progress_text(self)
    }

    /// Converts a Gregorian date; see [`from_ad`].
    ///
    /// # Errors
    /// Same as [`from_ad`].
    pub fn from_ad(date: jiff::civil::Date) -> Result<Self, CalendarError> {
        convert::from_ad(date)
    }

    /// Converts to a Gregorian date; see [`to_ad`].
    ///
    /// # Errors
    /// Same as [`to_ad`].
    pub fn to_ad(self) -> Result<jiff::civil::Date, CalendarError> {
        convert::to_ad(self)
    }
}

impl FromStr for BsDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {s}",
                parts.len()
            )));
        };

        let year = Self::parse_component::<u16>(year)?;
        let month = Self::parse_component::<u8>(month)?;
        let day = Self::parse_component::<u8>(day)?;

        Ok(Self::new(year, month, day)?)
    }
}

impl BsDate {
    /// Parses an unsigned decimal component; signs and other characters are rejected
    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(u16, u8, u8)> for BsDate {
    type Error = CalendarError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl Serialize for BsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
