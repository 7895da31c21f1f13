//! Lunar month lengths and per-year month listings.

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::position::{month_at, position_of};
use crate::table::YearRow;

/// A single lunar month with its Gregorian span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarMonth {
    start: NaiveDate,
    year: i32,
    month: u8,
    leap: bool,
    days: u8,
}

impl LunarMonth {
    /// Returns the lunar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month number (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns `true` for the leap month.
    pub fn is_leap(self) -> bool {
        self.leap
    }

    /// Returns the Gregorian date of the first day.
    pub fn start(self) -> NaiveDate {
        self.start
    }

    /// Returns the Gregorian date of the last day.
    pub fn end(self) -> NaiveDate {
        self.start + chrono::Days::new(u64::from(self.days) - 1)
    }

    /// Returns the number of days (29 or 30).
    pub fn days(self) -> u8 {
        self.days
    }

    /// Returns `true` if `date` falls within this month.
    pub fn contains(self, date: NaiveDate) -> bool {
        (self.start..=self.end()).contains(&date)
    }
}

/// Returns the leap month of `year`, or `None` if the year has none.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is not in the table.
pub fn leap_month(year: i32) -> Result<Option<u8>, CalendarError> {
    let leap = YearRow::get(year)?.leap_month();
    Ok((leap > 0).then_some(leap))
}

/// Returns the number of lunar months in `year` (12, or 13 with a leap month).
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is not in the table.
pub fn months_in_year(year: i32) -> Result<u8, CalendarError> {
    Ok(YearRow::get(year)?.month_count() as u8)
}

/// Returns the Gregorian date of the first day of lunar `year`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` is not in the table.
pub fn new_year(year: i32) -> Result<NaiveDate, CalendarError> {
    Ok(YearRow::get(year)?.start_date(0))
}

/// Returns the number of days in the lunar month `(year, leap, month)`.
///
/// The length is the distance from the month's first day to the first day
/// of the month after it, which for the last month of a year is month 1 of
/// the following year.
///
/// # Errors
///
/// - [`CalendarError::YearOutOfRange`] if `year` is not in the table, or if
///   the month is the last one of [`MAX_YEAR`](crate::MAX_YEAR).
/// - [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
/// - [`CalendarError::InvalidLeapMonth`] if `leap` is set and `month` is not
///   the leap month of `year`.
///
/// # Examples
///
/// ```
/// use lunisolar_calendar::days_in_month;
///
/// // 2023 repeats its second month.
/// assert_eq!(days_in_month(2023, false, 2).unwrap(), 30);
/// assert_eq!(days_in_month(2023, true, 2).unwrap(), 29);
/// assert!(days_in_month(2023, true, 3).is_err());
/// ```
pub fn days_in_month(year: i32, leap: bool, month: u8) -> Result<u8, CalendarError> {
    let row = YearRow::get(year)?;
    let position = checked_position(&row, month, leap)?;
    month_length(&row, position)
}

/// Returns the lunar month `(year, leap, month)` with its Gregorian span.
///
/// # Errors
///
/// Same as [`days_in_month`].
pub fn lunar_month(year: i32, leap: bool, month: u8) -> Result<LunarMonth, CalendarError> {
    let row = YearRow::get(year)?;
    let position = checked_position(&row, month, leap)?;
    month_from_row(&row, position)
}

/// Returns the number of days in lunar `year`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` or `year + 1` is not
/// in the table.
pub fn days_in_year(year: i32) -> Result<u16, CalendarError> {
    let start = YearRow::get(year)?.start_date(0);
    let end = YearRow::get(year + 1)?.start_date(0);
    Ok((end - start).num_days() as u16)
}

/// Lists every month of lunar `year` in calendar order.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if `year` or `year + 1` is not
/// in the table.
pub fn year_months(year: i32) -> Result<Vec<LunarMonth>, CalendarError> {
    let row = YearRow::get(year)?;
    (0..row.month_count())
        .map(|position| month_from_row(&row, position))
        .collect()
}

/// Validates `(month, leap)` against `row` and returns its position.
fn checked_position(
    row: &YearRow,
    month: u8,
    leap: bool,
) -> Result<usize, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let leap_month = row.leap_month();
    if leap && leap_month != month {
        return Err(CalendarError::InvalidLeapMonth {
            year: row.year(),
            month,
            leap_month: (leap_month > 0).then_some(leap_month),
        });
    }
    Ok(position_of(leap_month, month, leap))
}

fn month_from_row(row: &YearRow, position: usize) -> Result<LunarMonth, CalendarError> {
    let (month, leap) = month_at(row.leap_month(), position);
    Ok(LunarMonth {
        start: row.start_date(position),
        year: row.year(),
        month,
        leap,
        days: month_length(row, position)?,
    })
}

/// Length of the month at `position`, reading into the next row when the
/// month is the last of its year.
fn month_length(row: &YearRow, position: usize) -> Result<u8, CalendarError> {
    let start = row.start_date(position);
    let next_start = if position + 1 < row.month_count() {
        row.start_date(position + 1)
    } else {
        YearRow::get(row.year() + 1)?.start_date(0)
    };
    Ok((next_start - start).num_days() as u8)
}
