//! Conversion between Gregorian (AD) dates and Bikram Sambat.
//!
//! Both directions are linear walks over the month-length table, anchored at
//! [`EPOCH_AD`]: AD → BS consumes a day count year by year and then month by
//! month, and BS → AD accumulates the same lengths back into a day count.

use jiff::civil::Date;
use jiff::{ToSpan, Zoned};
use tracing::{debug, trace};

use crate::BsDate;
use crate::consts::EPOCH_AD;
use crate::error::CalendarError;
use crate::table;
use crate::types::{Month, Year};

/// Converts a Gregorian date to Bikram Sambat.
///
/// # Errors
/// Returns `CalendarError::BeforeEpoch` for dates before [`EPOCH_AD`] and
/// `CalendarError::BeyondTable` for dates after the last tabulated BS day.
pub fn from_ad(date: Date) -> Result<BsDate, CalendarError> {
    // A day span between two civil dates always fits, so `until` cannot fail here.
    let days = EPOCH_AD
        .until(date)
        .map_err(|_| CalendarError::BeyondTable { date })?
        .get_days();
    let Ok(mut remaining) = u32::try_from(days) else {
        debug!(%date, "rejected AD date before epoch");
        return Err(CalendarError::BeforeEpoch { date });
    };

    let mut year = None;
    for candidate in Year::all() {
        let year_len = u32::from(candidate.days());
        if remaining < year_len {
            year = Some(candidate);
            break;
        }
        remaining -= year_len;
    }
    let Some(year) = year else {
        debug!(%date, "rejected AD date past the table");
        return Err(CalendarError::BeyondTable { date });
    };

    for month in Month::all() {
        let month_len = u32::from(table::month_length(year, month));
        if remaining < month_len {
            // remaining < month_len <= u8::MAX
            let day = u8::try_from(remaining + 1)
                .map_err(|_| CalendarError::BeyondTable { date })?;
            let bs = BsDate::from_parts(year, month, day)?;
            trace!(ad = %date, bs = %bs, "converted AD to BS");
            return Ok(bs);
        }
        remaining -= month_len;
    }

    // The year walk left fewer days than the year holds, so a month always fits.
    Err(CalendarError::BeyondTable { date })
}

/// Converts a Gregorian `(year, month, day)` triple to Bikram Sambat.
///
/// The triple is validated as is. Nonexistent dates are rejected rather than
/// rolled over into the next month.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for a nonexistent Gregorian date, or
/// any error of [`from_ad`].
pub fn from_gregorian(year: i16, month: i8, day: i8) -> Result<BsDate, CalendarError> {
    let date = Date::new(year, month, day).map_err(|_| {
        debug!(year, month, day, "rejected invalid AD date");
        CalendarError::InvalidDate { year, month, day }
    })?;
    from_ad(date)
}

/// Today's date in Bikram Sambat, according to the host clock and time zone.
///
/// The clock is read once per call.
///
/// # Errors
/// Returns an error if the host date falls outside the tabulated range.
pub fn today() -> Result<BsDate, CalendarError> {
    let now = Zoned::now();
    let tz = now.time_zone().iana_name().unwrap_or("local");
    debug!(date = %now.date(), tz, "resolved host date");
    from_ad(now.date())
}

/// Number of days from the epoch (BS `MIN_YEAR`-01-01) to `date`.
pub fn days_since_epoch(date: BsDate) -> u32 {
    table::days_before_year(date.year_typed()) + u32::from(date.day_of_year()) - 1
}

/// Converts a Bikram Sambat date to Gregorian.
///
/// The day offset is added to [`EPOCH_AD`] with calendar arithmetic, so the
/// result does not depend on time zones or daylight-saving transitions.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange` if the Gregorian result cannot be
/// represented. Every tabulated date can be.
pub fn to_ad(date: BsDate) -> Result<Date, CalendarError> {
    let offset = i64::from(days_since_epoch(date));
    // The last tabulated day is far inside jiff's range, so this cannot overflow.
    let ad = EPOCH_AD
        .checked_add(offset.days())
        .map_err(|_| CalendarError::YearOutOfRange { year: date.year() })?;
    trace!(bs = %date, ad = %ad, "converted BS to AD");
    Ok(ad)
}

/// Converts a Bikram Sambat `(year, month, day)` triple to Gregorian.
///
/// # Errors
/// Returns `CalendarError::YearOutOfRange`, `MonthOutOfRange` or
/// `DayOutOfRange` if the triple is not a tabulated BS date.
pub fn to_gregorian(year: u16, month: u8, day: u8) -> Result<Date, CalendarError> {
    to_ad(BsDate::new(year, month, day)?)
}
