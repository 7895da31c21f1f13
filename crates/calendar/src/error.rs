//! Error types for the lunisolar-calendar crate.

use std::fmt;

use chrono::NaiveDate;

/// Error type for all fallible operations in the lunisolar-calendar crate.
///
/// Every variant is a precondition violation on caller input. Nothing is
/// clamped or normalized: a day past the end of a month is rejected rather
/// than rolled into the next month.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a lunar year has no row in the table.
    ///
    /// Also raised by length queries on the final month of
    /// [`MAX_YEAR`](crate::MAX_YEAR), whose end lies in the missing row of
    /// the following year.
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        /// The unsupported year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// Returned when a Gregorian date cannot be resolved against any row.
    #[error("date {date} is outside the supported range")]
    DateOutOfRange {
        /// The unsupported Gregorian date.
        date: NaiveDate,
    },

    /// Returned when a lunar month number is outside 1..=12.
    #[error("invalid lunar month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number.
        month: u8,
    },

    /// Returned when a leap month is requested for a month that is not the
    /// leap month of that year.
    #[error("month {month} of {year} is not a leap month (leap month: {})", LeapMonth(.leap_month))]
    InvalidLeapMonth {
        /// The lunar year.
        year: i32,
        /// The requested month number.
        month: u8,
        /// The year's actual leap month, if any.
        leap_month: Option<u8>,
    },

    /// Returned when a day is zero or exceeds the length of its lunar month.
    #[error("invalid day: {day} (month has {max_day} days)")]
    InvalidDay {
        /// The invalid day number.
        day: u8,
        /// Number of days in the month.
        max_day: u8,
    },
}

impl CalendarError {
    pub(crate) fn year_out_of_range(year: i32) -> Self {
        Self::YearOutOfRange {
            year,
            min: crate::MIN_YEAR,
            max: crate::MAX_YEAR,
        }
    }
}

/// Renders a year's leap month, or `none`.
struct LeapMonth<'a>(&'a Option<u8>);

impl fmt::Display for LeapMonth<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            Some(month) => write!(f, "{month}"),
            None => f.write_str("none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_year_out_of_range() {
        let err = CalendarError::year_out_of_range(1849);
        assert_eq!(
            err.to_string(),
            "year 1849 is outside the supported range 1850..=2150"
        );
    }

    #[test]
    fn error_date_out_of_range() {
        let err = CalendarError::DateOutOfRange {
            date: NaiveDate::from_ymd_opt(1850, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "date 1850-01-01 is outside the supported range"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid lunar month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_leap_month() {
        let err = CalendarError::InvalidLeapMonth {
            year: 2023,
            month: 3,
            leap_month: Some(2),
        };
        assert_eq!(
            err.to_string(),
            "month 3 of 2023 is not a leap month (leap month: 2)"
        );
    }

    #[test]
    fn error_invalid_leap_month_none() {
        let err = CalendarError::InvalidLeapMonth {
            year: 2024,
            month: 1,
            leap_month: None,
        };
        assert_eq!(
            err.to_string(),
            "month 1 of 2024 is not a leap month (leap month: none)"
        );
    }

    #[test]
    fn leap_month_display() {
        assert_eq!(LeapMonth(&Some(6)).to_string(), "6");
        assert_eq!(LeapMonth(&None).to_string(), "none");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 (month has 29 days)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
