//! # lunisolar-calendar
//!
//! Conversion between Gregorian dates and the traditional lunisolar calendar
//! for lunar years 1850 through 2150.
//!
//! The calendar is not computed astronomically. An embedded table records,
//! for every supported year, the Gregorian date on which each lunar month
//! begins and which month (if any) is repeated as a leap month. All queries
//! are pure lookups over that table and are safe to call from any thread.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"solar_to_lunar()"| B["LunarDate"]
//!     B -->|"lunar_to_solar()"| A
//!     T["month-start table"] --> L["locate_month()"]
//!     L --> P["month_at() / position_of()"]
//!     P --> B
//!     T --> M["days_in_month()"]
//!     M -->|"validates"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use lunisolar_calendar::{LunarDate, days_in_month, leap_month};
//!
//! let new_year = NaiveDate::from_ymd_opt(2023, 1, 22).unwrap();
//! let lunar = LunarDate::from_solar(new_year).unwrap();
//! assert_eq!(lunar, LunarDate::new(2023, false, 1, 1).unwrap());
//! assert_eq!(lunar.to_solar(), new_year);
//!
//! assert_eq!(leap_month(2023).unwrap(), Some(2));
//! assert_eq!(days_in_month(2023, true, 2).unwrap(), 29);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | Supported range and row access to the embedded table |
//! | `locate` | Month-boundary search within a row |
//! | `position` | Row position to (month, leap) mapping |
//! | `convert` | Gregorian to lunar and back |
//! | `month` | Month lengths, leap months, per-year listings |
//! | `date` | `LunarDate` value type |
//! | `error` | Error types |

mod convert;
mod date;
mod error;
mod locate;
mod month;
mod position;
mod table;
mod table_data;

pub use convert::{lunar_to_solar, solar_to_lunar};
pub use date::LunarDate;
pub use error::CalendarError;
pub use month::{
    LunarMonth, days_in_month, days_in_year, leap_month, lunar_month, months_in_year, new_year,
    year_months,
};
pub use table::{MAX_YEAR, MIN_YEAR};
