//! Error types for calendar lookups and conversions.

use jiff::civil::Date;

use crate::consts::{EPOCH_AD, MAX_YEAR, MIN_YEAR, MONTHS_PER_YEAR};

/// Error type for all fallible calendar operations.
///
/// Every variant is a deterministic validation failure. Retrying with the
/// same input gives the same result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// BS year outside the tabulated range.
    #[error(
        "BS year {year} is outside the supported range {min}..={max}",
        min = MIN_YEAR,
        max = MAX_YEAR
    )]
    YearOutOfRange {
        /// The rejected year.
        year: u16,
    },

    /// Month number outside `1..=12`.
    #[error("BS month {month} is outside 1..={max}", max = MONTHS_PER_YEAR)]
    MonthOutOfRange {
        /// The rejected month.
        month: u8,
    },

    /// Day past the tabulated length of its month (or zero).
    #[error("BS day {day} is invalid for {year}-{month:02} (max {max_day})")]
    DayOutOfRange {
        /// Year of the rejected date.
        year: u16,
        /// Month of the rejected date.
        month: u8,
        /// The rejected day.
        day: u8,
        /// Tabulated length of that month.
        max_day: u8,
    },

    /// AD date after the last tabulated BS day.
    #[error("AD date {date} is past the end of BS {max}", max = MAX_YEAR)]
    BeyondTable {
        /// The rejected AD date.
        date: Date,
    },

    /// AD date before the epoch; BS has no representation for it here.
    #[error("AD date {date} precedes the epoch {epoch}", epoch = EPOCH_AD)]
    BeforeEpoch {
        /// The rejected AD date.
        date: Date,
    },

    /// Nonexistent Gregorian date, e.g. month 13 or April 31.
    #[error("invalid AD date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year as given.
        year: i16,
        /// Month as given.
        month: i8,
        /// Day as given.
        day: i8,
    },
}

impl CalendarError {
    /// Whether the input fell outside the tabulated BS domain.
    pub const fn is_out_of_domain(&self) -> bool {
        matches!(
            self,
            Self::YearOutOfRange { .. }
                | Self::MonthOutOfRange { .. }
                | Self::DayOutOfRange { .. }
                | Self::BeyondTable { .. }
        )
    }
}
