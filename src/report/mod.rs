pub mod json;
pub mod md;
pub mod text;

use crate::error::FormscoreError;
use crate::types::report::FormulationReport;
use crate::types::scoring::Metric;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Md,
    Json,
}

pub fn render(report: &FormulationReport, format: OutputFormat) -> Result<String, FormscoreError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Json => json::to_json(report).map_err(FormscoreError::Json),
    }
}

/// Static reading guide shown under the metrics.
pub const INTERPRETATION: [(Metric, &str); 4] = [
    (
        Metric::Sustainability,
        "PEG-free LC emulsifiers and GLDA improve environmental performance.",
    ),
    (Metric::Sensory, "Squalane enhances glide; gums increase tack."),
    (
        Metric::Stability,
        "Lamellar LC structures and gums increase stability; excess shea reduces it.",
    ),
    (
        Metric::Cost,
        "Squalane and LC emulsifiers contribute the most to cost.",
    ),
];
