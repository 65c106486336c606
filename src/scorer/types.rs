use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Fixed-point score with exactly three fractional digits, `0.000..=100.000`.
///
/// Stored as thousandths so the rendered form never drifts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u32);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const MAX: Score = Score(100_000);

    /// Clamps into range and rounds to the nearest thousandth. Non-finite is zero.
    pub fn from_percentage(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        let clamped = value.clamp(0.0, 100.0);
        Score(((clamped * 1000.0).round() as u32).min(Self::MAX.0))
    }

    /// Like [`Score::from_percentage`] but refuses values outside `[0, 100]`.
    pub fn try_from_percentage(value: f64) -> Option<Self> {
        (value.is_finite() && (0.0..=100.0).contains(&value)).then(|| Self::from_percentage(value))
    }

    pub fn from_thousandths(thousandths: u32) -> Self {
        Score(thousandths.min(Self::MAX.0))
    }

    pub fn thousandths(&self) -> u32 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.0 / 1000, self.0 % 1000)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        let value = match Raw::deserialize(deserializer)? {
            Raw::Number(v) => v,
            Raw::Text(s) => s.trim().parse::<f64>().map_err(de::Error::custom)?,
        };
        Score::try_from_percentage(value)
            .ok_or_else(|| de::Error::custom("Score must be between 0.000 and 100.000"))
    }
}

/// Integer sub-scores, each independently rounded from a `[0, 1]` fraction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub accuracy: u8,
    pub smoothness: u8,
    pub completeness: u8,
}

impl ScoreDetails {
    pub fn from_fractions(accuracy: f64, smoothness: f64, completeness: f64) -> Self {
        Self {
            accuracy: percent(accuracy),
            smoothness: percent(smoothness),
            completeness: percent(completeness),
        }
    }
}

fn percent(fraction: f64) -> u8 {
    (crate::geometry::unit(fraction) * 100.0).round() as u8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub score: Score,
    pub feedback: String,
    pub details: ScoreDetails,
}

impl ScoringResult {
    pub fn zero(feedback: &str) -> Self {
        Self {
            score: Score::ZERO,
            feedback: feedback.to_string(),
            details: ScoreDetails::default(),
        }
    }
}

/// What an analyzer measured, before blending and gating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeAnalysis {
    /// Composite geometric accuracy, `[0, 1]`.
    pub accuracy: f64,
    /// The shape's defining feature; keys the ceiling ladder.
    pub gate: f64,
    pub smoothness: f64,
    pub completeness: f64,
    /// Named intermediate values, for reports.
    pub features: Vec<(&'static str, f64)>,
}
