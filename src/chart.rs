use crate::types::formulation::{Formulation, Ingredient};
use crate::types::scoring::{Metric, Score, ScoreSet, SCORE_MAX};
use serde::Serialize;
use std::f64::consts::TAU;

#[derive(Debug, Clone, Serialize)]
pub struct CompositionSlice {
    pub ingredient: Ingredient,
    pub label: &'static str,
    pub value: f64,
    /// Percentage of the formulation total, unrounded.
    pub share: f64,
}

/// One vertex of the radar polygon; `angle` is in radians.
#[derive(Debug, Clone, Serialize)]
pub struct RadarPoint {
    pub axis: &'static str,
    pub score: Score,
    pub angle: f64,
}

pub fn composition(formulation: &Formulation) -> Vec<CompositionSlice> {
    let total = formulation.total();
    Ingredient::ALL
        .iter()
        .map(|ingredient| {
            let value = formulation.get(*ingredient);
            let share = if total > 0.0 {
                value / total * 100.0
            } else {
                0.0
            };
            CompositionSlice {
                ingredient: *ingredient,
                label: ingredient.label(),
                value,
                share,
            }
        })
        .collect()
}

/// Closed polygon: the first metric is repeated at the end, and angles run
/// evenly from 0 to a full turn inclusive.
pub fn radar(scores: &ScoreSet) -> Vec<RadarPoint> {
    let mut axes: Vec<Metric> = Metric::ALL.to_vec();
    axes.push(Metric::ALL[0]);

    let last = (axes.len() - 1) as f64;
    axes.iter()
        .enumerate()
        .map(|(index, metric)| RadarPoint {
            axis: metric.axis(),
            score: scores.get(*metric),
            angle: TAU * index as f64 / last,
        })
        .collect()
}

pub fn composition_text(slices: &[CompositionSlice]) -> String {
    let mut output = String::from("Ingredient Composition\n");
    for slice in slices {
        output.push_str(&format!(
            "  {:<28} {:>5.1}%  ({:.1}% of total)\n",
            slice.label, slice.value, slice.share
        ));
    }
    output
}

pub fn radar_text(points: &[RadarPoint]) -> String {
    let mut output = format!("Performance Radar (0-{SCORE_MAX:.0})\n");
    for point in points {
        output.push_str(&format!(
            "  {:<15} {:>4.1}  @ {:.3} rad\n",
            point.axis, point.score, point.angle
        ));
    }
    output
}
