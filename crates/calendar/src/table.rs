//! Read-only access to the embedded month-start table.

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::table_data::ROWS;

/// First lunar year covered by the table.
pub const MIN_YEAR: i32 = 1850;

/// Last lunar year covered by the table.
///
/// The final month of this year has no known end, so length queries on it
/// fail with [`CalendarError::YearOutOfRange`].
pub const MAX_YEAR: i32 = 2150;

/// Encodes a Gregorian `(month, day)` as a table marker.
///
/// Months 13 and above address the following Gregorian year, which keeps
/// markers of one row strictly increasing across New Year's Day.
pub(crate) fn marker(month: u32, day: u32) -> u16 {
    (month * 100 + day) as u16
}

/// The table row of a single lunar year.
#[derive(Debug, Clone, Copy)]
pub(crate) struct YearRow {
    year: i32,
    row: &'static [u16],
}

impl YearRow {
    /// Looks up the row for `year`.
    pub(crate) fn get(year: i32) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::year_out_of_range(year));
        }
        let row = ROWS[(year - MIN_YEAR) as usize];
        Ok(Self { year, row })
    }

    /// Returns the lunar year of this row.
    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    /// Returns the ordinary month that is followed by a leap month, or 0.
    pub(crate) fn leap_month(&self) -> u8 {
        self.row[0] as u8
    }

    /// Returns the month-start markers, one per lunar month.
    pub(crate) fn month_starts(&self) -> &'static [u16] {
        &self.row[1..]
    }

    /// Returns the number of lunar months in this year (12 or 13).
    pub(crate) fn month_count(&self) -> usize {
        self.row.len() - 1
    }

    /// Returns the Gregorian date on which the month at `position` begins.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.month_count()`.
    pub(crate) fn start_date(&self, position: usize) -> NaiveDate {
        marker_date(self.year, self.month_starts()[position])
    }
}

/// Decodes a table marker of `year`'s row into a Gregorian date.
fn marker_date(year: i32, marker: u16) -> NaiveDate {
    let month = u32::from(marker / 100);
    let day = u32::from(marker % 100);
    let (year, month) = if month > 12 {
        (year + 1, month - 12)
    } else {
        (year, month)
    };
    NaiveDate::from_ymd_opt(year, month, day).expect("table markers are valid Gregorian dates")
}
