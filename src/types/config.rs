use crate::types::formulation::{Formulation, Ingredient};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormscoreConfig {
    #[serde(default)]
    pub formulation: FormulationConfig,
}

/// Per-ingredient overrides; unset keys fall through to the layer below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormulationConfig {
    pub shea: Option<f64>,
    pub squalane: Option<f64>,
    pub lc_emulsifier: Option<f64>,
    pub gum_blend: Option<f64>,
    pub glda: Option<f64>,
    pub preservative: Option<f64>,
}

impl FormulationConfig {
    pub fn get(&self, ingredient: Ingredient) -> Option<f64> {
        match ingredient {
            Ingredient::Shea => self.shea,
            Ingredient::Squalane => self.squalane,
            Ingredient::LcEmulsifier => self.lc_emulsifier,
            Ingredient::GumBlend => self.gum_blend,
            Ingredient::Glda => self.glda,
            Ingredient::Preservative => self.preservative,
        }
    }

    /// Layers `self` on top of `base`; keys set here win.
    pub fn over(self, base: FormulationConfig) -> FormulationConfig {
        FormulationConfig {
            shea: self.shea.or(base.shea),
            squalane: self.squalane.or(base.squalane),
            lc_emulsifier: self.lc_emulsifier.or(base.lc_emulsifier),
            gum_blend: self.gum_blend.or(base.gum_blend),
            glda: self.glda.or(base.glda),
            preservative: self.preservative.or(base.preservative),
        }
    }

    pub fn apply(&self, base: Formulation) -> Formulation {
        Ingredient::ALL
            .iter()
            .fold(base, |formulation, ingredient| match self.get(*ingredient) {
                Some(value) => formulation.with(*ingredient, value),
                None => formulation,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_unset_ingredients() {
        let overrides: FormscoreConfig = toml::from_str(
            r#"
[formulation]
squalane = 12.0
glda = 0.9
"#,
        )
        .expect("config should parse");

        let formulation = overrides.formulation.apply(Formulation::default());
        assert_eq!(formulation.squalane, 12.0);
        assert_eq!(formulation.glda, 0.9);
        assert_eq!(formulation.shea, 10.0);
        assert_eq!(formulation.gum_blend, 0.6);
    }

    #[test]
    fn over_prefers_set_keys_and_falls_through_otherwise() {
        let base = FormulationConfig {
            shea: Some(20.0),
            glda: Some(0.1),
            ..FormulationConfig::default()
        };
        let top = FormulationConfig {
            glda: Some(0.7),
            ..FormulationConfig::default()
        };

        let merged = top.over(base);
        assert_eq!(merged.shea, Some(20.0));
        assert_eq!(merged.glda, Some(0.7));
        assert_eq!(merged.squalane, None);
    }

    #[test]
    fn unknown_ingredient_is_rejected() {
        let parsed = toml::from_str::<FormscoreConfig>(
            r#"
[formulation]
glycerin = 3.0
"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let cfg: FormscoreConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(
            cfg.formulation.apply(Formulation::default()),
            Formulation::default()
        );
    }
}
