mod cli;

use clap::Parser;
use gutscore::config;
use gutscore::error::{GutscoreError, Result};
use gutscore::input::{self, LoadedAssessment};
use gutscore::recommend::RULES;
use gutscore::report::{self, OutputFormat, ReportInput};
use gutscore::score;
use gutscore::types::config::{GutscoreConfig, ReportFormatSetting};
use gutscore::types::report::{PriorityFilter, RecommendationView};
use gutscore::Factor;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = match (quiet, verbose) {
                (true, _) => "error",
                (false, 0) => "warn",
                (false, 1) => "info",
                (false, 2) => "debug",
                (false, _) => "trace",
            };
            EnvFilter::try_new(level).map_err(|e| GutscoreError::Logging(e.to_string()))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| GutscoreError::Logging(e.to_string()))
}

fn resolve_view(args: &cli::ViewArgs, cfg: &GutscoreConfig) -> RecommendationView {
    let mut view = cfg.recommendation_view();
    if let Some(priority) = args.priority {
        view.priority = match priority {
            cli::PriorityArg::All => PriorityFilter::All,
            cli::PriorityArg::High => PriorityFilter::High,
        };
    }
    if let Some(top) = args.top {
        view.limit = Some(top as usize);
    }
    view
}

fn load_config(args: &cli::ViewArgs) -> Result<GutscoreConfig> {
    let loaded = config::load_config(&args.config_dir)?;
    if loaded.is_none() {
        info!(dir = %args.config_dir.display(), "no gutscore.toml found, using defaults");
    }
    Ok(loaded.unwrap_or_default())
}

/// Prints input issues and maps them to an exit code.
fn finish(loaded: &LoadedAssessment, strict: bool, quiet: bool) -> i32 {
    if loaded.issues.is_empty() {
        return exit_code::SUCCESS;
    }
    if !quiet {
        for issue in &loaded.issues {
            eprintln!("warning: {issue}");
        }
    }
    if strict {
        exit_code::BLOCKING
    } else {
        exit_code::WARNINGS
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let cfg = load_config(&cmd.view)?;
            let loaded = input::load_assessment(&cmd.path)?;
            let result = gutscore::evaluate(&loaded.assessment);
            info!(
                total = result.scores.total_score,
                recommendations = result.recommendations.len(),
                "evaluated assessment"
            );

            let format = match cmd.format {
                Some(cli::ReportFormat::Json) => OutputFormat::Json,
                Some(cli::ReportFormat::Md) => OutputFormat::Md,
                None => match cfg.report.format {
                    ReportFormatSetting::Json => OutputFormat::Json,
                    ReportFormatSetting::Md => OutputFormat::Md,
                },
            };
            let breakdown = cfg
                .report
                .breakdown
                .then(|| score::breakdown(&loaded.assessment));
            let rendered = report::render(
                &ReportInput {
                    result: &result,
                    view: resolve_view(&cmd.view, &cfg),
                    breakdown: breakdown.as_deref(),
                },
                format,
            )?;
            println!("{rendered}");

            Ok(finish(&loaded, cmd.strict || cfg.input.strict, cli.quiet))
        }
        cli::Commands::Recommend(cmd) => {
            let cfg = load_config(&cmd.view)?;
            let loaded = input::load_assessment(&cmd.path)?;
            let result = gutscore::evaluate(&loaded.assessment);
            let selected = resolve_view(&cmd.view, &cfg).select(&result.recommendations);

            if selected.is_empty() {
                println!("recommend: no recommendations");
            } else {
                println!("recommendations:");
                for recommendation in selected {
                    println!(
                        "- [{}] {}: {}",
                        recommendation.priority, recommendation.category, recommendation.issue
                    );
                    println!("  {}", recommendation.suggestion);
                }
            }

            Ok(finish(&loaded, cfg.input.strict, cli.quiet))
        }
        cli::Commands::Options(cmd) => {
            let factors = match cmd.factor.as_deref() {
                Some(key) => vec![Factor::from_key(key)
                    .ok_or_else(|| GutscoreError::UnknownFactor(key.to_string()))?],
                None => Factor::ALL.to_vec(),
            };

            for factor in factors {
                println!("{} ({})", factor.key(), factor.category());
                for (option, points) in score::option_table(factor) {
                    println!("  {option} = {points}");
                }
                let rules = RULES
                    .iter()
                    .filter(|rule| rule.factor == factor)
                    .map(|rule| format!("{} [{}]", rule.id, rule.priority))
                    .collect::<Vec<_>>();
                if !rules.is_empty() {
                    println!("  rules: {}", rules.join(", "));
                }
            }
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
