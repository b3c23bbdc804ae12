use crate::types::formulation::Formulation;
use crate::types::scoring::Score;

pub fn stability_raw(formulation: &Formulation) -> Score {
    0.5 * formulation.lc_emulsifier + 0.4 * formulation.gum_blend - 0.1 * formulation.shea
}
