use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

/// Bikram Sambat dates and year progress.
#[derive(Parser)]
#[command(
    name = "sambat",
    version,
    about = "Bikram Sambat (Nepali calendar) dates and year progress"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Month names to print, overriding the config file.
    #[arg(long, global = true, value_enum)]
    pub names: Option<MonthNames>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show today's BS date and year progress.
    Today,
    /// Convert an AD date (YYYY-MM-DD) to BS.
    FromAd {
        /// Gregorian date, e.g. 2023-04-14.
        date: String,
    },
    /// Convert a BS date (YYYY-MM-DD) to AD.
    ToAd {
        /// Bikram Sambat date, e.g. 2080-01-01.
        date: String,
    },
    /// List the month lengths of a BS year.
    Months {
        /// Bikram Sambat year, e.g. 2082.
        year: u16,
    },
}

/// Script used for month names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MonthNames {
    /// Romanized, e.g. Magh
    #[default]
    English,
    /// Devanagari, e.g. माघ
    Nepali,
}
