mod cli;

use clap::Parser;
use drivescore::config::load_config;
use drivescore::report::{self, OutputFormat};
use drivescore::{
    analyze, logging, AlignmentPolicy, Dataset, PipelineConfig, ScoreError, ScoringConfig,
};
use std::path::PathBuf;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn score(
    configs: &[PathBuf],
    format: cli::ReportFormat,
    alignment: Option<cli::Alignment>,
) -> Result<i32, ScoreError> {
    let loaded = load_config(configs)?;
    let dataset = loaded.dataset()?;
    let mut pipeline = loaded.pipeline();
    if let Some(alignment) = alignment {
        pipeline.alignment = match alignment {
            cli::Alignment::Truncate => AlignmentPolicy::Truncate,
            cli::Alignment::Renormalize => AlignmentPolicy::Renormalize,
            cli::Alignment::DropObservation => AlignmentPolicy::DropObservation,
        };
    }

    let score_report = analyze(&dataset, &pipeline)?;
    let output_format = match format {
        cli::ReportFormat::Text => OutputFormat::Text,
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    };
    println!("{}", report::render(&score_report, output_format)?);
    Ok(exit_code::SUCCESS)
}

fn run() -> Result<i32, ScoreError> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        None => score(&[], cli::ReportFormat::Text, None),
        Some(cli::Commands::Score(cmd)) => score(&cmd.configs, cmd.format, cmd.alignment),
        Some(cli::Commands::Check(cmd)) => {
            let loaded = load_config(&cmd.configs)?;
            let score_report = analyze(&loaded.dataset()?, &loaded.pipeline())?;

            if score_report.warnings.is_empty() {
                println!(
                    "check: ok ({} parameters, {} scores)",
                    score_report.parameters.len(),
                    score_report.scores.len()
                );
                return Ok(exit_code::SUCCESS);
            }

            for warning in &score_report.warnings {
                println!("[WARN] {}", warning.message());
            }
            Ok(exit_code::WARNINGS)
        }
        Some(cli::Commands::Sample) => {
            let template =
                ScoringConfig::from_dataset(&Dataset::sample(), &PipelineConfig::default());
            print!("{}", toml::to_string(&template)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
