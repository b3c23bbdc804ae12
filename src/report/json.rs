use crate::types::report::FormulationReport;

pub fn to_json(report: &FormulationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
