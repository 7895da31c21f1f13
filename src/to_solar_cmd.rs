//! `to-solar` command: lunar date -> Gregorian date.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lunisolar_calendar::LunarDate;

use crate::cli::ToSolarArgs;
use crate::output::{DatePair, OutputOptions, ToSolarView, render};

/// Run the lunar to Gregorian conversion.
pub fn run(args: ToSolarArgs, options: &OutputOptions) -> Result<String> {
    let _cmd = info_span!("to_solar").entered();
    let lunar = LunarDate::new(args.year, args.leap, args.month, args.day).with_context(|| {
        format!(
            "invalid lunar date: year {}, month {}{}, day {}",
            args.year,
            args.month,
            if args.leap { " (leap)" } else { "" },
            args.day
        )
    })?;

    let solar = lunar.to_solar();
    info!(%lunar, %solar, "converted");

    render(&ToSolarView(DatePair::new(lunar, solar, options)), options)
}
