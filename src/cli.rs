use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "nc-license-checkr",
    about = "Scan a dependency tree for non-commercial license restrictions",
    version
)]
pub struct Cli {
    /// Project path to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file [default: ./.nc-license-checkr/config.toml, fallback ~/.config/nc-license-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Classifier to run (repeatable); replaces the configured list
    #[arg(long = "filter", value_name = "NAME")]
    pub filters: Vec<String>,

    /// Only run exact SPDX identifier matching
    #[arg(long, conflicts_with = "filters")]
    pub strict: bool,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Also write the report to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase diagnostic logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
