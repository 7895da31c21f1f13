mod cli;
mod config;
mod convert;
mod logging;
mod month_cmd;
mod output;
mod to_lunar_cmd;
mod to_solar_cmd;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = config::load(cli.config.as_deref())?;
    let options = convert::build_output_options(&config.output, cli.format.as_deref())?;
    match cli.command {
        Command::ToLunar(args) => to_lunar_cmd::run(args, &options),
        Command::ToSolar(args) => to_solar_cmd::run(args, &options),
        Command::Month(args) => month_cmd::run(args, &options),
        Command::Year(args) => year_cmd::run(args, &options),
    }
}
