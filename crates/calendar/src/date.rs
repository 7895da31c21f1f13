//! Lunar date value type.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::convert::{lunar_to_solar, solar_to_lunar};
use crate::error::CalendarError;
use crate::month;

/// A date in the lunisolar calendar.
///
/// Holds a supported year, a month that exists in that year, and a day that
/// exists in that month. Both constructors enforce this, so conversion back
/// to a Gregorian date cannot fail.
///
/// Dates order chronologically: a leap month sorts directly after the
/// ordinary month it repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    year: i32,
    leap: bool,
    month: u8,
    day: u8,
}

impl PartialOrd for LunarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LunarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.leap, self.day).cmp(&(
            other.year,
            other.month,
            other.leap,
            other.day,
        ))
    }
}

impl LunarDate {
    /// Creates a lunar date from its components.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::YearOutOfRange`] if `year` is not in the table, or
    ///   the month is the last one of [`MAX_YEAR`](crate::MAX_YEAR) and its
    ///   length is unknown.
    /// - [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
    /// - [`CalendarError::InvalidLeapMonth`] if `leap` is set on a month that
    ///   is not the year's leap month.
    /// - [`CalendarError::InvalidDay`] if `day` is 0 or past the month's end.
    ///
    /// # Examples
    ///
    /// ```
    /// use lunisolar_calendar::{CalendarError, LunarDate};
    ///
    /// let date = LunarDate::new(2023, true, 2, 15).unwrap();
    /// assert!(date.is_leap());
    ///
    /// // The leap second month of 2023 has 29 days.
    /// assert_eq!(
    ///     LunarDate::new(2023, true, 2, 30).unwrap_err(),
    ///     CalendarError::InvalidDay { day: 30, max_day: 29 },
    /// );
    /// ```
    pub fn new(year: i32, leap: bool, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = month::days_in_month(year, leap, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay { day, max_day });
        }
        Ok(Self::from_parts(year, leap, month, day))
    }

    /// Creates a lunar date from components already resolved against the
    /// table.
    pub(crate) fn from_parts(year: i32, leap: bool, month: u8, day: u8) -> Self {
        Self {
            year,
            leap,
            month,
            day,
        }
    }

    /// Converts a Gregorian date. See [`solar_to_lunar`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] if the date cannot be
    /// resolved against the table.
    pub fn from_solar(date: NaiveDate) -> Result<Self, CalendarError> {
        solar_to_lunar(date)
    }

    /// Converts to the Gregorian date. See [`lunar_to_solar`].
    pub fn to_solar(self) -> NaiveDate {
        lunar_to_solar(self)
    }

    /// Returns the lunar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns `true` if the date falls in the leap month.
    pub fn is_leap(self) -> bool {
        self.leap
    }

    /// Returns the month number (1..=12).
    ///
    /// For a leap month this is the number of the ordinary month it follows.
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the leap month of `year`, or `None` if the year has none.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if `year` is not in the
    /// table.
    pub fn leap_month(year: i32) -> Result<Option<u8>, CalendarError> {
        month::leap_month(year)
    }

    /// Returns the number of days in the lunar month `(year, leap, month)`.
    ///
    /// # Errors
    ///
    /// See [`days_in_month`](crate::days_in_month).
    pub fn days_in_month(year: i32, leap: bool, month: u8) -> Result<u8, CalendarError> {
        month::days_in_month(year, leap, month)
    }

    /// Returns the number of days in this date's month.
    pub fn month_days(self) -> u8 {
        // The last month of MAX_YEAR starts in the following Gregorian year,
        // which no constructor accepts.
        month::days_in_month(self.year, self.leap, self.month)
            .expect("LunarDate never falls in a month of unknown length")
    }
}

impl fmt::Display for LunarDate {
    /// Formats as `YYYY-MM-DD`, marking leap months as `YYYY-LMM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.leap { "L" } else { "" };
        write!(f, "{:04}-{leap}{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl TryFrom<NaiveDate> for LunarDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        solar_to_lunar(date)
    }
}

impl From<LunarDate> for NaiveDate {
    fn from(date: LunarDate) -> Self {
        lunar_to_solar(date)
    }
}
