use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "drivescore",
    version,
    about = "Driving behavior scoring from per-parameter measurement series"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a dataset and print the report
    Score(ScoreCommand),
    /// Validate configuration and report pipeline warnings
    Check(CheckCommand),
    /// Print the built-in sample dataset as a config file
    Sample,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Alignment {
    Truncate,
    Renormalize,
    DropObservation,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Config file; repeat to layer overrides (later files win)
    #[arg(short, long = "config")]
    pub configs: Vec<PathBuf>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
    /// Override pipeline.alignment from the config
    #[arg(long, value_enum)]
    pub alignment: Option<Alignment>,
}

#[derive(Args)]
pub struct CheckCommand {
    #[arg(short, long = "config")]
    pub configs: Vec<PathBuf>,
}
