use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gregorian and lunisolar calendar conversion.
#[derive(Parser)]
#[command(
    name = "lunisolar",
    version,
    about = "Convert dates between the Gregorian and lunisolar calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: lunisolar.toml, if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override output format from config ("text" or "json").
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to a lunar date.
    ToLunar(ToLunarArgs),
    /// Convert a lunar date to a Gregorian date.
    ToSolar(ToSolarArgs),
    /// Show the length of one lunar month.
    Month(MonthArgs),
    /// List the months of a lunar year.
    Year(YearArgs),
}

/// Arguments for the `to-lunar` subcommand.
#[derive(clap::Args)]
pub struct ToLunarArgs {
    /// Gregorian date as YYYY-MM-DD.
    pub date: String,
}

/// Arguments for the `to-solar` subcommand.
#[derive(clap::Args)]
pub struct ToSolarArgs {
    /// Lunar year.
    pub year: i32,

    /// Lunar month (1..=12).
    pub month: u8,

    /// Day within the month.
    pub day: u8,

    /// The date lies in the leap month that follows `month`.
    #[arg(short, long)]
    pub leap: bool,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Lunar year.
    pub year: i32,

    /// Lunar month (1..=12).
    pub month: u8,

    /// Query the leap month that follows `month`.
    #[arg(short, long)]
    pub leap: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Lunar year.
    pub year: i32,
}
