use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reqscore",
    version,
    about = "Lexical quality scoring for generated software requirements"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one requirements text for specificity, measurability and testability
    Score(ScoreCommand),
    /// Score every record of a JSON Lines file of generated outputs
    Batch(BatchCommand),
    /// Average scored records per strategy and configuration
    Aggregate(AggregateCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Text file to score; reads stdin when omitted or `-`
    pub path: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct BatchCommand {
    /// JSON Lines file with `strategy`, `config` and `text` fields
    pub input: PathBuf,
    /// Write scored records here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct AggregateCommand {
    /// Scored JSON Lines file or directory of them
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
