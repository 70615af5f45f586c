use crate::consts::{MAX_YEAR, MIN_DAY, MIN_YEAR, MONTH_NAMES, MONTH_NAMES_NEPALI, MONTHS_PER_YEAR};
use crate::error::CalendarError;
use crate::table;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A BS year guaranteed to be in the tabulated range `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating it against the month-length table
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the year is not tabulated.
    pub fn new(value: u16) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(CalendarError::YearOutOfRange { year: value });
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(CalendarError::YearOutOfRange { year: value })
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Number of days in this year
    pub fn days(self) -> u16 {
        table::year_length(self)
    }

    /// Every tabulated year, oldest first
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_YEAR..=MAX_YEAR).filter_map(|y| Self::new(y).ok())
    }

    /// The following year, or `None` past `MAX_YEAR`
    pub fn next(self) -> Option<Self> {
        Self::new(self.get() + 1).ok()
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A BS month guaranteed to be in the range `1..=12` (Baisakh..=Chaitra).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MONTHS_PER_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::MonthOutOfRange` if the value is 0 or > 12.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value)
            .ok_or(CalendarError::MonthOutOfRange { month: value })?;
        if value > MONTHS_PER_YEAR {
            return Err(CalendarError::MonthOutOfRange { month: value });
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position, for indexing per-month arrays
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Romanized month name, e.g. `Magh`
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }

    /// Devanagari month name, e.g. `माघ`
    pub const fn nepali_name(self) -> &'static str {
        MONTH_NAMES_NEPALI[self.index()]
    }

    /// Baisakh through Chaitra
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MONTHS_PER_YEAR).filter_map(|m| Self::new(m).ok())
    }

    /// The following month in the same year, or `None` after Chaitra
    pub fn next(self) -> Option<Self> {
        Self::new(self.get() + 1).ok()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given BS year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the tabulated month length
    ///
    /// # Errors
    /// Returns `CalendarError::DayOutOfRange` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, CalendarError> {
        let max_day = table::month_length(year, month);
        let out_of_range = CalendarError::DayOutOfRange {
            year: year.get(),
            month: month.get(),
            day: value,
            max_day,
        };

        if value < MIN_DAY || value > max_day {
            return Err(out_of_range);
        }
        NonZeroU8::new(value).map(Self).ok_or(out_of_range)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
