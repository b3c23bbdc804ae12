use crate::types::formulation::Formulation;
use crate::types::scoring::Score;

/// Squalane adds glide, gums add tack.
pub fn sensory_raw(formulation: &Formulation) -> Score {
    0.5 * formulation.squalane + 0.2 * formulation.lc_emulsifier - 0.3 * formulation.gum_blend
}
