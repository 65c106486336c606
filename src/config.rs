use crate::error::{ShapeScoreError, SsResult};
use crate::shapes::Shape;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
}

/// Share of accuracy, smoothness and completeness in the raw score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub accuracy: f64,
    pub smoothness: f64,
    pub completeness: f64,
}

impl BlendWeights {
    pub fn total(&self) -> f64 {
        self.accuracy + self.smoothness + self.completeness
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringWeights {
    // === CIRCLE ===
    #[arg(long, default_value_t = 0.90)]
    pub circle_accuracy: f64,
    #[arg(long, default_value_t = 0.05)]
    pub circle_smoothness: f64,
    #[arg(long, default_value_t = 0.05)]
    pub circle_completeness: f64,

    // === STAR ===
    #[arg(long, default_value_t = 0.85)]
    pub star_accuracy: f64,
    #[arg(long, default_value_t = 0.05)]
    pub star_smoothness: f64,
    #[arg(long, default_value_t = 0.10)]
    pub star_completeness: f64,

    // === SQUARE ===
    #[arg(long, default_value_t = 0.90)]
    pub square_accuracy: f64,
    #[arg(long, default_value_t = 0.03)]
    pub square_smoothness: f64,
    #[arg(long, default_value_t = 0.07)]
    pub square_completeness: f64,

    // === TRIANGLE ===
    #[arg(long, default_value_t = 0.90)]
    pub triangle_accuracy: f64,
    #[arg(long, default_value_t = 0.03)]
    pub triangle_smoothness: f64,
    #[arg(long, default_value_t = 0.07)]
    pub triangle_completeness: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            circle_accuracy: 0.90,
            circle_smoothness: 0.05,
            circle_completeness: 0.05,

            star_accuracy: 0.85,
            star_smoothness: 0.05,
            star_completeness: 0.10,

            square_accuracy: 0.90,
            square_smoothness: 0.03,
            square_completeness: 0.07,

            triangle_accuracy: 0.90,
            triangle_smoothness: 0.03,
            triangle_completeness: 0.07,
        }
    }
}

impl ScoringWeights {
    pub fn blend(&self, shape: Shape) -> BlendWeights {
        let (accuracy, smoothness, completeness) = match shape {
            Shape::Circle => (
                self.circle_accuracy,
                self.circle_smoothness,
                self.circle_completeness,
            ),
            Shape::Star => (
                self.star_accuracy,
                self.star_smoothness,
                self.star_completeness,
            ),
            Shape::Square => (
                self.square_accuracy,
                self.square_smoothness,
                self.square_completeness,
            ),
            Shape::Triangle => (
                self.triangle_accuracy,
                self.triangle_smoothness,
                self.triangle_completeness,
            ),
        };
        BlendWeights {
            accuracy,
            smoothness,
            completeness,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SsResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: Self = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Accuracy must carry the largest share, and no blend may exceed 1.
    pub fn validate(&self) -> SsResult<()> {
        use strum::IntoEnumIterator;

        for shape in Shape::iter() {
            let b = self.blend(shape);
            let parts = [b.accuracy, b.smoothness, b.completeness];
            if parts.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(ShapeScoreError::Config(format!(
                    "{} weights must be finite and non-negative",
                    shape
                )));
            }
            if b.total() > 1.0 + 1e-9 {
                return Err(ShapeScoreError::Config(format!(
                    "{} weights sum to {:.3}, expected at most 1.0",
                    shape,
                    b.total()
                )));
            }
            if b.accuracy < b.smoothness || b.accuracy < b.completeness {
                return Err(ShapeScoreError::Config(format!(
                    "{} accuracy weight must dominate the blend",
                    shape
                )));
            }
        }
        Ok(())
    }

    /// Overrides only the flags the user actually typed.
    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(circle_accuracy, "circle_accuracy");
        update_if_present!(circle_smoothness, "circle_smoothness");
        update_if_present!(circle_completeness, "circle_completeness");

        update_if_present!(star_accuracy, "star_accuracy");
        update_if_present!(star_smoothness, "star_smoothness");
        update_if_present!(star_completeness, "star_completeness");

        update_if_present!(square_accuracy, "square_accuracy");
        update_if_present!(square_smoothness, "square_smoothness");
        update_if_present!(square_completeness, "square_completeness");

        update_if_present!(triangle_accuracy, "triangle_accuracy");
        update_if_present!(triangle_smoothness, "triangle_smoothness");
        update_if_present!(triangle_completeness, "triangle_completeness");
    }
}
