//! Pure conversion functions: TOML config structs -> output settings.

use anyhow::{Result, bail};
use chrono::format::{Item, StrftimeItems};

use crate::config::OutputToml;
use crate::output::{OutputFormat, OutputOptions};

/// Parses an output format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Checks that `s` is a usable strftime pattern.
pub fn parse_date_format(s: &str) -> Result<String> {
    if StrftimeItems::new(s).any(|item| matches!(item, Item::Error)) {
        bail!("invalid date format: {s:?}");
    }
    Ok(s.to_string())
}

/// Builds [`OutputOptions`] from the TOML output configuration.
///
/// A `--format` flag given on the command line replaces the configured one.
pub fn build_output_options(
    output: &OutputToml,
    format_override: Option<&str>,
) -> Result<OutputOptions> {
    let format = parse_format(format_override.unwrap_or(&output.format))?;
    let date_format = parse_date_format(&output.date_format)?;
    Ok(OutputOptions {
        format,
        date_format,
    })
}
