pub mod cost;
pub mod sensory;
pub mod stability;
pub mod sustainability;

use crate::chart;
use crate::types::formulation::Formulation;
use crate::types::report::{FormulationReport, MetricReading};
use crate::types::scoring::ScoreSet;

/// Scores a formulation. Pure: the same input always yields the same set.
pub fn score(formulation: &Formulation) -> ScoreSet {
    ScoreSet::new(
        sensory::sensory_raw(formulation),
        stability::stability_raw(formulation),
        sustainability::sustainability_raw(formulation),
        cost::cost_raw(formulation),
    )
}

pub fn analyze(formulation: &Formulation) -> FormulationReport {
    let scores = score(formulation);
    let metrics = scores
        .iter()
        .map(|(metric, value)| MetricReading::new(metric, value))
        .collect();

    FormulationReport {
        formulation: *formulation,
        total: formulation.total(),
        scores,
        metrics,
        composition: chart::composition(formulation),
        radar: chart::radar(&scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::formulation::Ingredient;
    use crate::types::scoring::Tier;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn default_formulation_scores() {
        let formulation = Formulation::new(10.0, 4.0, 3.0, 0.6, 0.3, 1.0);
        let scores = score(&formulation);

        assert_close(scores.sensory, 2.42);
        assert_close(scores.stability, 0.74);
        assert_close(scores.sustainability, 0.29);
        assert_close(scores.cost, 2.62);
        assert_close(formulation.total(), 18.9);
    }

    #[test]
    fn all_zero_formulation_is_poor_everywhere() {
        let report = analyze(&Formulation::zero());

        assert_eq!(report.total, 0.0);
        assert_eq!(report.scores, ScoreSet::new(0.0, 0.0, 0.0, 0.0));
        assert!(report.metrics.iter().all(|m| m.tier == Tier::Poor));
    }

    #[test]
    fn sensory_peaks_below_saturation_inside_the_domain() {
        let formulation = Formulation::zero()
            .with(Ingredient::Squalane, 15.0)
            .with(Ingredient::LcEmulsifier, 10.0);
        assert_close(score(&formulation).sensory, 9.5);
    }

    #[test]
    fn sensory_saturates_at_ten_past_the_domain() {
        let formulation = Formulation::zero()
            .with(Ingredient::Squalane, 30.0)
            .with(Ingredient::LcEmulsifier, 10.0);
        assert_eq!(score(&formulation).sensory, 10.0);
    }

    #[test]
    fn negative_raw_scores_clamp_to_zero() {
        let formulation = Formulation::zero().with(Ingredient::Shea, 25.0);
        let scores = score(&formulation);
        assert_eq!(scores.stability, 0.0);
        assert_eq!(scores.sustainability, 0.0);
    }

    #[test]
    fn scores_stay_in_range_across_the_domain() {
        let steps: i32 = 4;
        let grid = |ingredient: Ingredient| {
            let max = *ingredient.range().end();
            (0..=steps).map(move |i| max * f64::from(i) / f64::from(steps))
        };

        for shea in grid(Ingredient::Shea) {
            for squalane in grid(Ingredient::Squalane) {
                for lc in grid(Ingredient::LcEmulsifier) {
                    for gum in grid(Ingredient::GumBlend) {
                        let formulation = Formulation::new(shea, squalane, lc, gum, 0.5, 1.0);
                        for (metric, value) in score(&formulation).iter() {
                            assert!(
                                (0.0..=10.0).contains(&value),
                                "{metric:?} = {value} for {formulation:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn upper_bounds_cap_stability_and_sustainability() {
        let formulation = Formulation::new(0.0, 15.0, 10.0, 2.0, 1.0, 2.0);
        let scores = score(&formulation);
        assert_close(scores.stability, 5.8);
        assert_close(scores.sustainability, 3.9);
        assert_eq!(Tier::classify(scores.sustainability), Tier::Poor);
    }

    #[test]
    fn scoring_is_deterministic() {
        let formulation = Formulation::new(7.5, 11.0, 6.2, 1.3, 0.8, 1.7);
        assert_eq!(score(&formulation), score(&formulation));
    }

    #[test]
    fn report_carries_metrics_in_radar_order() {
        let report = analyze(&Formulation::default());
        let labels: Vec<_> = report.metrics.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec!["Sensory Slip", "Stability", "Sustainability", "Cost Impact"]
        );
        assert_eq!(report.radar.len(), 5);
        assert_eq!(report.composition.len(), 6);
    }
}
