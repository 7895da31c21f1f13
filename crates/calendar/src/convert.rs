//! Conversion between Gregorian dates and lunar dates.

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::date::LunarDate;
use crate::error::CalendarError;
use crate::locate::locate_month;
use crate::position::{month_at, position_of};
use crate::table::{MAX_YEAR, YearRow, marker};

/// Converts a Gregorian date to a lunar date.
///
/// A date that falls before the lunar new year of its Gregorian year belongs
/// to the last month of the previous lunar year. Dates in the Gregorian year
/// after [`MAX_YEAR`](crate::MAX_YEAR) resolve against that year's row as
/// long as they fall in a month of known length.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if the date has no row to be
/// resolved against: it falls before the first lunar new year of
/// [`MIN_YEAR`](crate::MIN_YEAR), or in or after the final month of
/// [`MAX_YEAR`](crate::MAX_YEAR), whose end is not recorded.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lunisolar_calendar::solar_to_lunar;
///
/// let date = NaiveDate::from_ymd_opt(2023, 1, 22).unwrap();
/// let lunar = solar_to_lunar(date).unwrap();
/// assert_eq!((lunar.year(), lunar.is_leap(), lunar.month(), lunar.day()), (2023, false, 1, 1));
/// ```
#[tracing::instrument(level = "trace", ret, err)]
pub fn solar_to_lunar(date: NaiveDate) -> Result<LunarDate, CalendarError> {
    let out_of_range = |_| CalendarError::DateOutOfRange { date };

    // MAX_YEAR + 1 has no row of its own; its dates can only live in the
    // wrapped tail of MAX_YEAR.
    let located = if date.year() > MAX_YEAR {
        None
    } else {
        let row = YearRow::get(date.year()).map_err(out_of_range)?;
        locate_month(row.month_starts(), marker(date.month(), date.day()))
            .map(|position| (row, position))
    };
    let (row, position) = match located {
        Some(found) => found,
        None => {
            debug!(%date, "date precedes lunar new year, resolving against previous year");
            let row = YearRow::get(date.year() - 1).map_err(out_of_range)?;
            let probe = marker(date.month() + 12, date.day());
            let position = locate_month(row.month_starts(), probe)
                .expect("a date in the following Gregorian year follows the row's first month");
            (row, position)
        }
    };

    if row.year() == MAX_YEAR && position + 1 == row.month_count() {
        return Err(CalendarError::DateOutOfRange { date });
    }

    let (month, leap) = month_at(row.leap_month(), position);
    let day = (date - row.start_date(position)).num_days() + 1;
    Ok(LunarDate::from_parts(row.year(), leap, month, day as u8))
}

/// Converts a lunar date to its Gregorian date.
///
/// This is the exact inverse of [`solar_to_lunar`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lunisolar_calendar::{LunarDate, lunar_to_solar};
///
/// let lunar = LunarDate::new(2023, true, 2, 1).unwrap();
/// assert_eq!(lunar_to_solar(lunar), NaiveDate::from_ymd_opt(2023, 3, 22).unwrap());
/// ```
#[tracing::instrument(level = "trace", ret)]
pub fn lunar_to_solar(date: LunarDate) -> NaiveDate {
    let row = YearRow::get(date.year()).expect("LunarDate always holds a supported year");
    let position = position_of(row.leap_month(), date.month(), date.is_leap());
    row.start_date(position) + Days::new(u64::from(date.day()) - 1)
}
