use crate::types::formulation::Formulation;
use crate::types::scoring::Score;

/// Higher means more expensive; squalane and LC emulsifier dominate.
pub fn cost_raw(formulation: &Formulation) -> Score {
    0.4 * formulation.squalane + 0.3 * formulation.lc_emulsifier + 0.2 * formulation.gum_blend
}
