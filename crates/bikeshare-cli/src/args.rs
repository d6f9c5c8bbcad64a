use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(about = "Explore US bike-share trip data interactively", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Diagnostic verbosity on stderr
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
