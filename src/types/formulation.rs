use serde::Serialize;
use std::ops::RangeInclusive;

/// One of the six adjustable ingredients, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    Shea,
    Squalane,
    LcEmulsifier,
    GumBlend,
    Glda,
    Preservative,
}

impl Ingredient {
    pub const ALL: [Ingredient; 6] = [
        Ingredient::Shea,
        Ingredient::Squalane,
        Ingredient::LcEmulsifier,
        Ingredient::GumBlend,
        Ingredient::Glda,
        Ingredient::Preservative,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Ingredient::Shea => "shea",
            Ingredient::Squalane => "squalane",
            Ingredient::LcEmulsifier => "lc_emulsifier",
            Ingredient::GumBlend => "gum_blend",
            Ingredient::Glda => "glda",
            Ingredient::Preservative => "preservative",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Ingredient::Shea => "Shea Butter",
            Ingredient::Squalane => "Squalane",
            Ingredient::LcEmulsifier => "Liquid Crystal Emulsifier",
            Ingredient::GumBlend => "Gum Blend",
            Ingredient::Glda => "GLDA",
            Ingredient::Preservative => "Natural Preservative System",
        }
    }

    pub fn role(self) -> &'static str {
        match self {
            Ingredient::Shea => "occlusive",
            Ingredient::Squalane => "emollient",
            Ingredient::LcEmulsifier => "emulsifier",
            Ingredient::GumBlend => "thickener",
            Ingredient::Glda => "chelating agent",
            Ingredient::Preservative => "preservative",
        }
    }

    /// Allowed percentage range, inclusive on both ends.
    pub fn range(self) -> RangeInclusive<f64> {
        let max = match self {
            Ingredient::Shea => 25.0,
            Ingredient::Squalane => 15.0,
            Ingredient::LcEmulsifier => 10.0,
            Ingredient::GumBlend => 2.0,
            Ingredient::Glda => 1.0,
            Ingredient::Preservative => 2.0,
        };
        0.0..=max
    }

    pub fn default_value(self) -> f64 {
        match self {
            Ingredient::Shea => 10.0,
            Ingredient::Squalane => 4.0,
            Ingredient::LcEmulsifier => 3.0,
            Ingredient::GumBlend => 0.6,
            Ingredient::Glda => 0.3,
            Ingredient::Preservative => 1.0,
        }
    }
}

/// Ingredient percentages for a single evaluation.
///
/// Nothing forces the sum to 100; `total()` is informational.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Formulation {
    pub shea: f64,
    pub squalane: f64,
    pub lc_emulsifier: f64,
    pub gum_blend: f64,
    pub glda: f64,
    pub preservative: f64,
}

impl Formulation {
    pub fn new(
        shea: f64,
        squalane: f64,
        lc_emulsifier: f64,
        gum_blend: f64,
        glda: f64,
        preservative: f64,
    ) -> Self {
        Self {
            shea,
            squalane,
            lc_emulsifier,
            gum_blend,
            glda,
            preservative,
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    pub fn get(&self, ingredient: Ingredient) -> f64 {
        match ingredient {
            Ingredient::Shea => self.shea,
            Ingredient::Squalane => self.squalane,
            Ingredient::LcEmulsifier => self.lc_emulsifier,
            Ingredient::GumBlend => self.gum_blend,
            Ingredient::Glda => self.glda,
            Ingredient::Preservative => self.preservative,
        }
    }

    pub fn with(mut self, ingredient: Ingredient, value: f64) -> Self {
        let slot = match ingredient {
            Ingredient::Shea => &mut self.shea,
            Ingredient::Squalane => &mut self.squalane,
            Ingredient::LcEmulsifier => &mut self.lc_emulsifier,
            Ingredient::GumBlend => &mut self.gum_blend,
            Ingredient::Glda => &mut self.glda,
            Ingredient::Preservative => &mut self.preservative,
        };
        *slot = value;
        self
    }

    pub fn total(&self) -> f64 {
        self.shea
            + self.squalane
            + self.lc_emulsifier
            + self.gum_blend
            + self.glda
            + self.preservative
    }
}

impl Default for Formulation {
    fn default() -> Self {
        Ingredient::ALL
            .iter()
            .fold(Self::zero(), |formulation, ingredient| {
                formulation.with(*ingredient, ingredient.default_value())
            })
    }
}
