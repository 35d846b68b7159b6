use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gutscore",
    version,
    about = "Gut microbiome habit scoring and recommendation CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
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
    /// Score an answer file and print the full report
    Score(ScoreCommand),
    /// Print only the recommendations for an answer file
    Recommend(RecommendCommand),
    /// Print the point tables
    Options(OptionsCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PriorityArg {
    All,
    High,
}

#[derive(Args)]
pub struct ViewArgs {
    /// Only show recommendations of this priority
    #[arg(long, value_enum)]
    pub priority: Option<PriorityArg>,
    /// Show at most this many recommendations
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub top: Option<u32>,
    /// Directory holding gutscore.toml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Answer file (.toml or .json)
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Treat unanswered or unrecognized factors as blocking
    #[arg(long)]
    pub strict: bool,
    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Args)]
pub struct RecommendCommand {
    /// Answer file (.toml or .json)
    pub path: PathBuf,
    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Args)]
pub struct OptionsCommand {
    /// Factor key such as `fiber` or `goodSleep`; all factors when omitted
    pub factor: Option<String>,
}
