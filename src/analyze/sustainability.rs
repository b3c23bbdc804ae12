use crate::types::formulation::Formulation;
use crate::types::scoring::Score;

pub fn sustainability_raw(formulation: &Formulation) -> Score {
    0.3 * formulation.lc_emulsifier + 0.3 * formulation.glda + 0.3 * formulation.preservative
        - 0.1 * formulation.shea
}
