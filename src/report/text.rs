use crate::chart;
use crate::report::INTERPRETATION;
use crate::types::report::FormulationReport;

pub fn to_text(report: &FormulationReport) -> String {
    let mut output = String::from("Sustainable Moisturizer Formulation\n\n");
    output.push_str(&chart::composition_text(&report.composition));
    output.push_str(&format!("Total: {:.1}%\n\n", report.total));

    output.push_str("Performance Metrics\n");
    for reading in &report.metrics {
        output.push_str(&format!(
            "  {} {:<15} {:>4.1}/10 [{}]\n",
            reading.tier.glyph(),
            format!("{}:", reading.label),
            reading.score,
            reading.tier.as_str()
        ));
    }

    output.push_str("\nInterpretation\n");
    for (metric, note) in INTERPRETATION {
        output.push_str(&format!("  {}: {}\n", metric.label(), note));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use crate::types::formulation::{Formulation, Ingredient};

    #[test]
    fn text_report_shows_total_and_tiers() {
        let report = analyze(&Formulation::default());
        let rendered = to_text(&report);

        assert!(rendered.contains("Total: 18.9%"));
        assert!(rendered.contains("Sensory Slip:"));
        assert!(rendered.contains("2.4/10 [poor]"));
    }

    #[test]
    fn peak_sensory_reads_good() {
        let formulation = Formulation::zero()
            .with(Ingredient::Squalane, 15.0)
            .with(Ingredient::LcEmulsifier, 10.0);
        let rendered = to_text(&analyze(&formulation));
        assert!(rendered.contains("9.5/10 [good]"));
    }
}
