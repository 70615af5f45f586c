mod cli;
mod config;
mod logging;

use std::process;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use sambat::{BsDate, DATE_SEPARATOR, Month};
use tracing::info;

use crate::cli::{Cli, Command, MonthNames};
use crate::config::Config;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let names = cli.names.unwrap_or(config.display.names);
    let show_progress = config.display.show_progress;

    match cli.command {
        Command::Today => {
            let date = sambat::today().context("today's date is outside the BS table")?;
            print_date(&date, names, show_progress);
        }
        Command::FromAd { date } => {
            let (year, month, day) = parse_ad(&date)?;
            let bs = sambat::from_gregorian(year, month, day)
                .with_context(|| format!("cannot convert AD {date}"))?;
            info!(ad = %date, bs = %bs, "converted");
            print_date(&bs, names, show_progress);
        }
        Command::ToAd { date } => {
            let bs: BsDate = date
                .parse()
                .with_context(|| format!("invalid BS date {date}"))?;
            let ad = bs.to_ad()?;
            info!(bs = %bs, ad = %ad, "converted");
            println!("{ad}");
        }
        Command::Months { year } => {
            let lengths = sambat::month_lengths(year)?;
            for (month, days) in Month::all().zip(lengths) {
                println!("{} {days}", month_name(month, names));
            }
        }
    }
    Ok(())
}

fn print_date(date: &BsDate, names: MonthNames, show_progress: bool) {
    match names {
        MonthNames::English => println!("{}", date.format()),
        MonthNames::Nepali => println!("{}", date.format_nepali()),
    }
    if show_progress {
        println!("{}", date.progress());
    }
}

const fn month_name(month: Month, names: MonthNames) -> &'static str {
    match names {
        MonthNames::English => month.name(),
        MonthNames::Nepali => month.nepali_name(),
    }
}

/// Splits `YYYY-MM-DD` into Gregorian components without validating the date.
fn parse_ad(s: &str) -> Result<(i16, i8, i8)> {
    let parts: Vec<&str> = s.trim().split(DATE_SEPARATOR).collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("expected an AD date as YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {s:?}");
    };
    Ok((
        parse_component(year, "year", s)?,
        parse_component(month, "month", s)?,
        parse_component(day, "day", s)?,
    ))
}

fn parse_component<T: FromStr>(part: &str, name: &str, input: &str) -> Result<T> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        bail!("invalid {name} in {input:?}");
    }
    part.parse()
        .map_err(|_| anyhow!("{name} out of range in {input:?}"))
}
