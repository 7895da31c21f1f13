//! `to-lunar` command: Gregorian date -> lunar date.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span};

use lunisolar_calendar::solar_to_lunar;

use crate::cli::ToLunarArgs;
use crate::output::{DatePair, OutputOptions, ToLunarView, render};

/// Run the Gregorian to lunar conversion.
pub fn run(args: ToLunarArgs, options: &OutputOptions) -> Result<String> {
    let _cmd = info_span!("to_lunar").entered();
    let solar = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .with_context(|| format!("invalid Gregorian date {:?} (expected YYYY-MM-DD)", args.date))?;

    let lunar = solar_to_lunar(solar).with_context(|| format!("failed to convert {solar}"))?;
    info!(%solar, %lunar, "converted");

    render(&ToLunarView(DatePair::new(lunar, solar, options)), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn text_options() -> OutputOptions {
        OutputOptions {
            format: OutputFormat::Text,
            date_format: "%Y-%m-%d".to_string(),
        }
    }

    fn args(date: &str) -> ToLunarArgs {
        ToLunarArgs {
            date: date.to_string(),
        }
    }

    #[test]
    fn converts_new_year() {
        let out = run(args("2023-01-22"), &text_options()).unwrap();
        assert_eq!(out, "2023-01-22 -> 2023-01-01");
    }

    #[test]
    fn rejects_malformed_date() {
        let err = run(args("2023/01/22"), &text_options()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid Gregorian date"));
    }

    #[test]
    fn reports_out_of_range() {
        let err = run(args("1850-01-01"), &text_options()).unwrap_err();
        assert!(format!("{err:#}").contains("outside the supported range"));
    }
}
