use crate::error::{FormscoreError, Result};
use crate::types::formulation::{Formulation, Ingredient};
use crate::types::scoring::{Score, SCORE_MAX, SCORE_MIN};

/// Rejects the first ingredient, in catalog order, that is not finite or
/// falls outside its range.
pub fn validate(formulation: &Formulation) -> Result<()> {
    for ingredient in Ingredient::ALL {
        let value = formulation.get(ingredient);
        if !value.is_finite() {
            return Err(FormscoreError::NotFinite {
                ingredient: ingredient.key(),
            });
        }
        let range = ingredient.range();
        if !range.contains(&value) {
            return Err(FormscoreError::OutOfRange {
                ingredient: ingredient.key(),
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }
    }
    Ok(())
}

pub fn validate_score(score: Score) -> Result<Score> {
    if score.is_finite() && (SCORE_MIN..=SCORE_MAX).contains(&score) {
        Ok(score)
    } else {
        Err(FormscoreError::InvalidScore(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_defaults_and_bounds() {
        assert!(validate(&Formulation::default()).is_ok());
        assert!(validate(&Formulation::zero()).is_ok());
        assert!(validate(&Formulation::new(25.0, 15.0, 10.0, 2.0, 1.0, 2.0)).is_ok());
    }

    #[test]
    fn test_validate_rejects_first_out_of_range_ingredient() {
        let formulation = Formulation::default()
            .with(Ingredient::GumBlend, 2.5)
            .with(Ingredient::Preservative, -1.0);
        let result = validate(&formulation);
        assert!(matches!(
            result,
            Err(FormscoreError::OutOfRange {
                ingredient: "gum_blend",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let formulation = Formulation::default().with(Ingredient::Glda, f64::NAN);
        assert!(matches!(
            validate(&formulation),
            Err(FormscoreError::NotFinite { ingredient: "glda" })
        ));
    }

    #[test]
    fn test_validate_score_range() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(10.0).is_ok());
        assert!(matches!(
            validate_score(10.5),
            Err(FormscoreError::InvalidScore(_))
        ));
        assert!(validate_score(f64::INFINITY).is_err());
    }
}
