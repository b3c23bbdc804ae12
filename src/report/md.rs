use crate::report::INTERPRETATION;
use crate::types::report::FormulationReport;

pub fn to_markdown(report: &FormulationReport) -> String {
    let mut output = String::new();
    output.push_str("# Formulation Report\n\n");

    output.push_str("## Composition\n\n");
    output.push_str("| Ingredient | % | Share |\n|---|---:|---:|\n");
    for slice in &report.composition {
        output.push_str(&format!(
            "| {} | {:.1} | {:.1}% |\n",
            slice.label, slice.value, slice.share
        ));
    }
    output.push_str(&format!("\nTotal: **{:.1}%**\n\n", report.total));

    output.push_str("## Performance Metrics\n\n");
    for reading in &report.metrics {
        output.push_str(&format!(
            "- {}: {:.1}/10 ({} {})\n",
            reading.label,
            reading.score,
            reading.tier.glyph(),
            reading.tier.as_str()
        ));
    }

    output.push_str("\n## Interpretation\n\n");
    for (metric, note) in INTERPRETATION {
        output.push_str(&format!("### {}\n\n{}\n\n", metric.label(), note));
    }

    output
}
