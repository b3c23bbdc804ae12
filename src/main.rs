mod analyze;
mod chart;
mod cli;
mod config;
mod error;
mod limits;
mod report;
mod types;

use crate::error::FormscoreError;
use crate::types::formulation::{Formulation, Ingredient};
use crate::types::scoring::Tier;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Flags win over config layers, which win over catalog defaults.
fn resolve_formulation(args: &cli::IngredientArgs) -> Result<Formulation, FormscoreError> {
    let loaded = config::load_config(args.config.as_deref())?;
    let formulation = args
        .overrides()
        .apply(loaded.formulation.apply(Formulation::default()));
    tracing::debug!(?formulation, "resolved formulation");
    limits::validate(&formulation)?;
    Ok(formulation)
}

fn run() -> Result<i32, FormscoreError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    tracing::debug!("formscore v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        cli::Commands::Score(cmd) => {
            let formulation = resolve_formulation(&cmd.ingredients)?;
            let formulation_report = analyze::analyze(&formulation);
            for reading in &formulation_report.metrics {
                tracing::info!(
                    metric = reading.label,
                    score = reading.score,
                    tier = reading.tier.as_str(),
                    "scored"
                );
            }

            let output_format = match cmd.format {
                cli::ReportFormat::Text => report::OutputFormat::Text,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Json => report::OutputFormat::Json,
            };
            let rendered = report::render(&formulation_report, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Classify(cmd) => {
            let score = limits::validate_score(cmd.score)?;
            println!("{}", Tier::classify(score).as_str());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Chart(cmd) => {
            let formulation = resolve_formulation(&cmd.ingredients)?;
            let rendered = match (cmd.kind, cmd.format) {
                (cli::ChartKind::Composition, cli::ChartFormat::Text) => {
                    chart::composition_text(&chart::composition(&formulation))
                }
                (cli::ChartKind::Composition, cli::ChartFormat::Json) => {
                    serde_json::to_string_pretty(&chart::composition(&formulation))?
                }
                (cli::ChartKind::Radar, cli::ChartFormat::Text) => {
                    chart::radar_text(&chart::radar(&analyze::score(&formulation)))
                }
                (cli::ChartKind::Radar, cli::ChartFormat::Json) => {
                    serde_json::to_string_pretty(&chart::radar(&analyze::score(&formulation)))?
                }
            };
            println!("{}", rendered.trim_end());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Ingredients => {
            for ingredient in Ingredient::ALL {
                let range = ingredient.range();
                println!(
                    "{:<14} {:<28} {:<16} [{:.1}, {:.1}] default {:.1}",
                    ingredient.key(),
                    ingredient.label(),
                    ingredient.role(),
                    range.start(),
                    range.end(),
                    ingredient.default_value()
                );
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
