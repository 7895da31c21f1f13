//! `year` command: every month of a lunar year.

use anyhow::{Context, Result};
use tracing::{debug, info_span, warn};

use lunisolar_calendar::{
    CalendarError, LunarMonth, days_in_year, leap_month, lunar_month, months_in_year, year_months,
};

use crate::cli::YearArgs;
use crate::output::{MonthView, OutputOptions, YearView, render};

/// Run the year listing.
pub fn run(args: YearArgs, options: &OutputOptions) -> Result<String> {
    let _cmd = info_span!("year", year = args.year).entered();
    let year = args.year;

    let leap = leap_month(year).with_context(|| format!("no data for lunar year {year}"))?;
    let count = months_in_year(year).with_context(|| format!("no data for lunar year {year}"))?;
    let months = match year_months(year) {
        Ok(months) => months,
        Err(CalendarError::YearOutOfRange { year: next, .. }) if next == year + 1 => {
            warn!(year, "final month has no end marker, listing months of known length");
            known_months(year, leap)
        }
        Err(e) => return Err(e).with_context(|| format!("failed to list months of {year}")),
    };
    let days = days_in_year(year).ok();
    debug!(n_months = months.len(), ?days, "year resolved");

    let view = YearView {
        year,
        leap_month: leap,
        months_in_year: count,
        days,
        months: months
            .into_iter()
            .map(|m| MonthView::from_month(m, options))
            .collect(),
    };
    render(&view, options)
}

/// Months of `year` in calendar order, stopping at the first one whose
/// length is unknown.
fn known_months(year: i32, leap: Option<u8>) -> Vec<LunarMonth> {
    (1..=12u8)
        .flat_map(|month| {
            std::iter::once((month, false)).chain((leap == Some(month)).then_some((month, true)))
        })
        .map_while(|(month, is_leap)| lunar_month(year, is_leap, month).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn options(format: OutputFormat) -> OutputOptions {
        OutputOptions {
            format,
            date_format: "%Y-%m-%d".to_string(),
        }
    }

    #[test]
    fn leap_year_json() {
        let out = run(YearArgs { year: 2023 }, &options(OutputFormat::Json)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["leap_month"], 2);
        assert_eq!(parsed["days"], 384);
        let months = parsed["months"].as_array().unwrap();
        assert_eq!(months.len(), 13);
        assert_eq!(months[2]["leap"], true);
        assert_eq!(months[2]["start"], "2023-03-22");
    }

    #[test]
    fn common_year_text_header() {
        let out = run(YearArgs { year: 2024 }, &options(OutputFormat::Text)).unwrap();
        assert!(out.starts_with("2024: 12 months, 354 days, no leap month\n"));
    }

    #[test]
    fn final_year_lists_months_of_known_length() {
        let opts = options(OutputFormat::Json);
        let out = run(YearArgs { year: 2150 }, &opts).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["leap_month"], 6);
        assert_eq!(parsed["months_in_year"], 13);
        assert!(parsed["days"].is_null());
        let months = parsed["months"].as_array().unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[6]["leap"], true);
        assert_eq!(months[11]["month"], 11);
        assert_eq!(months[11]["end"], "2151-01-17");
    }

    #[test]
    fn final_year_text_names_unknown_month() {
        let out = run(YearArgs { year: 2150 }, &options(OutputFormat::Text)).unwrap();
        assert!(out.starts_with("2150: 13 months, length unknown, leap month 6\n"));
        assert!(out.ends_with("final month: length unknown, no end marker in the table"));
    }

    #[test]
    fn out_of_range_year() {
        let err = run(YearArgs { year: 1800 }, &options(OutputFormat::Text)).unwrap_err();
        assert!(format!("{err:#}").contains("no data for lunar year 1800"));
    }
}
