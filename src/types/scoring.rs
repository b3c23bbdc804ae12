use serde::Serialize;

pub type Score = f64;

pub const SCORE_MIN: Score = 0.0;
pub const SCORE_MAX: Score = 10.0;

const GOOD_THRESHOLD: Score = 7.0;
const CAUTION_THRESHOLD: Score = 4.0;

/// Saturate a raw score to `[0, 10]`. Overshoot is not reported.
pub fn clamp(raw: Score) -> Score {
    SCORE_MIN.max(SCORE_MAX.min(raw))
}

/// The four performance axes, in radar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Sensory,
    Stability,
    Sustainability,
    Cost,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Sensory,
        Metric::Stability,
        Metric::Sustainability,
        Metric::Cost,
    ];

    /// Heading used on metric tiles.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Sensory => "Sensory Slip",
            Metric::Stability => "Stability",
            Metric::Sustainability => "Sustainability",
            Metric::Cost => "Cost Impact",
        }
    }

    /// Short name used on radar axes.
    pub fn axis(self) -> &'static str {
        match self {
            Metric::Sensory => "Sensory",
            Metric::Stability => "Stability",
            Metric::Sustainability => "Sustainability",
            Metric::Cost => "Cost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Good,
    Caution,
    Poor,
}

impl Tier {
    pub fn classify(score: Score) -> Self {
        if score >= GOOD_THRESHOLD {
            Tier::Good
        } else if score >= CAUTION_THRESHOLD {
            Tier::Caution
        } else {
            Tier::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::Caution => "caution",
            Tier::Poor => "poor",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Tier::Good => '●',
            Tier::Caution => '◐',
            Tier::Poor => '○',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreSet {
    pub sensory: Score,
    pub stability: Score,
    pub sustainability: Score,
    pub cost: Score,
}

impl ScoreSet {
    /// Builds a set from raw values, clamping each one.
    pub fn new(sensory: Score, stability: Score, sustainability: Score, cost: Score) -> Self {
        Self {
            sensory: clamp(sensory),
            stability: clamp(stability),
            sustainability: clamp(sustainability),
            cost: clamp(cost),
        }
    }

    pub fn get(&self, metric: Metric) -> Score {
        match metric {
            Metric::Sensory => self.sensory,
            Metric::Stability => self.stability,
            Metric::Sustainability => self.sustainability,
            Metric::Cost => self.cost,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, Score)> + '_ {
        Metric::ALL.into_iter().map(move |metric| (metric, self.get(metric)))
    }
}
