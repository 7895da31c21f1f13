//! `month` command: length and span of one lunar month.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use lunisolar_calendar::lunar_month;

use crate::cli::MonthArgs;
use crate::output::{MonthView, OutputOptions, render};

/// Run the month length query.
pub fn run(args: MonthArgs, options: &OutputOptions) -> Result<String> {
    let _cmd = info_span!("month").entered();
    let month = lunar_month(args.year, args.leap, args.month).with_context(|| {
        format!(
            "no length for lunar month {}{} of {}",
            args.month,
            if args.leap { " (leap)" } else { "" },
            args.year
        )
    })?;
    debug!(days = month.days(), start = %month.start(), "month resolved");

    render(&MonthView::from_month(month, options), options)
}
