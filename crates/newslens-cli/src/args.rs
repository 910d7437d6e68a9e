use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "newslens")]
#[command(about = "Descriptive statistics and publication patterns of financial news headlines", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Configuration file (defaults to $NEWSLENS_CONFIG, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write every computed series as CSV into this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub export: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Headline length summary, articles per publisher and per date
    Stats {
        /// CSV export with headline, url, publisher, date and stock columns
        path: PathBuf,
    },

    /// Most prolific publishers and the domains behind publisher addresses
    Publishers {
        path: PathBuf,

        /// Number of publishers to rank (defaults to the configured value)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Publication frequency over time, time of day, and spike days
    Timeseries {
        path: PathBuf,

        /// Standard deviations above the daily mean that mark a spike
        #[arg(long)]
        sigmas: Option<f64>,
    },

    /// Print the effective configuration
    Config,
}
