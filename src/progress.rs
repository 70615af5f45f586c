//! Year-progress metrics derived from a BS date and the month-length table.

use serde::Serialize;

use crate::BsDate;
use crate::prelude::*;
use crate::table;

const PERCENT: u32 = 100;

/// 1-based ordinal of `date` within its BS year (Baisakh 1 is day 1).
pub fn day_of_year(date: &BsDate) -> u16 {
    table::days_before_month(date.year_typed(), date.month_typed()) + u16::from(date.day())
}

/// Days left in the year after `date`; zero on the last day of Chaitra.
pub fn days_remaining(date: &BsDate) -> u16 {
    date.year_typed().days() - day_of_year(date)
}

/// Elapsed share of the year as a truncated percentage in `0..=100`.
pub fn year_progress(date: &BsDate) -> u8 {
    percent(day_of_year(date), date.year_typed().days())
}

/// Progress line for display, e.g. `81d left / 77%`.
pub fn progress_text(date: &BsDate) -> String {
    YearProgress::of(date).to_string()
}

#[allow(clippy::cast_possible_truncation)]
fn percent(elapsed: u16, total: u16) -> u8 {
    // elapsed <= total, so the quotient is at most 100
    (u32::from(elapsed) * PERCENT / u32::from(total)) as u8
}

/// Snapshot of how far a date is into its BS year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{days_remaining}d left / {percent}%")]
pub struct YearProgress {
    /// 1-based day of the year
    pub day_of_year: u16,
    /// Days after `day_of_year` until the year ends
    pub days_remaining: u16,
    /// Length of the year
    pub days_in_year: u16,
    /// Truncated percentage of the year elapsed
    pub percent: u8,
}

/// Where a day of the year sits relative to the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayState {
    /// Before the current date
    Elapsed,
    /// The current date
    Today,
    /// After the current date
    Remaining,
}

impl YearProgress {
    /// Computes the progress of `date` through its year.
    pub fn of(date: &BsDate) -> Self {
        let day_of_year = day_of_year(date);
        let days_in_year = date.year_typed().days();
        Self {
            day_of_year,
            days_remaining: days_in_year - day_of_year,
            days_in_year,
            percent: percent(day_of_year, days_in_year),
        }
    }

    /// Classifies the 1-based day slot `day` of the same year.
    pub fn day_state(&self, day: u16) -> DayState {
        match day.cmp(&self.day_of_year) {
            std::cmp::Ordering::Less => DayState::Elapsed,
            std::cmp::Ordering::Equal => DayState::Today,
            std::cmp::Ordering::Greater => DayState::Remaining,
        }
    }

    /// States of every day in the year, in order.
    pub fn day_states(&self) -> impl Iterator<Item = DayState> + '_ {
        (1..=self.days_in_year).map(|day| self.day_state(day))
    }
}
