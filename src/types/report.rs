use crate::chart::{CompositionSlice, RadarPoint};
use crate::types::formulation::Formulation;
use crate::types::scoring::{Metric, Score, ScoreSet, Tier};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MetricReading {
    pub metric: Metric,
    pub label: &'static str,
    pub score: Score,
    pub tier: Tier,
}

impl MetricReading {
    pub fn new(metric: Metric, score: Score) -> Self {
        Self {
            metric,
            label: metric.label(),
            score,
            tier: Tier::classify(score),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormulationReport {
    pub formulation: Formulation,
    pub total: f64,
    pub scores: ScoreSet,
    pub metrics: Vec<MetricReading>,
    pub composition: Vec<CompositionSlice>,
    pub radar: Vec<RadarPoint>,
}
