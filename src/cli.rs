use crate::types::config::FormulationConfig;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "formscore",
    version,
    about = "Sustainable moisturizer formulation scoring CLI"
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
    /// Score a formulation and print the full report
    Score(ScoreCommand),
    /// Print the tier for a single score
    Classify(ClassifyCommand),
    /// Print composition or radar chart data
    Chart(ChartCommand),
    /// List ingredients with their ranges and defaults
    Ingredients,
}

/// Ingredient percentages; anything unset comes from config or defaults.
#[derive(Args, Debug, Default)]
pub struct IngredientArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub shea: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub squalane: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub lc_emulsifier: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub gum_blend: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub glda: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub preservative: Option<f64>,

    /// Formulation file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl IngredientArgs {
    pub fn overrides(&self) -> FormulationConfig {
        FormulationConfig {
            shea: self.shea,
            squalane: self.squalane,
            lc_emulsifier: self.lc_emulsifier,
            gum_blend: self.gum_blend,
            glda: self.glda,
            preservative: self.preservative,
        }
    }
}

#[derive(Args)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub ingredients: IngredientArgs,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ClassifyCommand {
    #[arg(allow_negative_numbers = true)]
    pub score: f64,
}

#[derive(Args)]
pub struct ChartCommand {
    #[command(flatten)]
    pub ingredients: IngredientArgs,
    #[arg(long, value_enum, default_value = "composition")]
    pub kind: ChartKind,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ChartFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

#[derive(Clone, ValueEnum)]
pub enum ChartKind {
    Composition,
    Radar,
}

#[derive(Clone, ValueEnum)]
pub enum ChartFormat {
    Text,
    Json,
}
