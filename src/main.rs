mod cli;

use clap::Parser;
use reqscore::error::{ReqscoreError, Result};
use reqscore::report::{self, OutputFormat};
use reqscore::types::config::ReqscoreConfig;
use reqscore::types::report::ScoreReport;
use reqscore::{aggregate, batch, config, labels, Evaluator};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn output_format(flag: Option<cli::ReportFormat>, config: &ReqscoreConfig) -> OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => config.output_format().into(),
    }
}

fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(ReqscoreError::PathNotFound(path.display().to_string()));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(cli: cli::Cli) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd)?;
    if loaded.is_none() {
        debug!("no {} found in {}", config::DEFAULT_CONFIG_FILE, cwd.display());
    }
    let cfg = loaded.unwrap_or_default();
    let evaluator = Evaluator::new();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let text = read_text(cmd.path.as_deref())?;
            let report = ScoreReport {
                evaluation: evaluator.evaluate_detailed(&text),
                requirements: labels::count_requirements(&text),
            };
            let rendered = report::render_score(&report, output_format(cmd.format, &cfg))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.input.exists() {
                return Err(ReqscoreError::PathNotFound(cmd.input.display().to_string()));
            }
            let reader = BufReader::new(File::open(&cmd.input)?);
            let source = cmd.input.display().to_string();
            let outcome = batch::score_records(reader, &source, &evaluator)?;

            match &cmd.output {
                Some(path) => {
                    let writer = BufWriter::new(File::create(path)?);
                    batch::write_records(writer, &outcome.records)?;
                    info!(
                        "scored {} record(s) into {}",
                        outcome.records.len(),
                        path.display()
                    );
                }
                None => batch::write_records(io::stdout().lock(), &outcome.records)?,
            }

            if outcome.skipped > 0 {
                warn!("{} malformed record(s) skipped", outcome.skipped);
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Aggregate(cmd) => {
            let summary = aggregate::collect(&cmd.path, &cfg.aggregate_settings())?;
            let rendered = report::render_summary(&summary, output_format(cmd.format, &cfg))?;
            println!("{rendered}");

            if summary.skipped > 0 {
                warn!("{} malformed record(s) skipped", summary.skipped);
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
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
