pub mod circle;
pub mod corners;
pub mod ladder;
pub mod metrics;
pub mod square;
pub mod star;
pub mod triangle;
pub mod types;

pub use self::types::{Score, ScoreDetails, ScoringResult, ShapeAnalysis};
use crate::config::ScoringWeights;
use crate::geometry::{unit, Point};
use crate::shapes::Shape;
use tracing::debug;

/// Blends analyzer output into graded results. Holds no per-stroke state.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Runs the analyzer for `shape` without grading. `None` below the minimum length.
    pub fn analyze(&self, shape: Shape, path: &[Point]) -> Option<ShapeAnalysis> {
        if path.len() < shape.min_points() {
            return None;
        }
        Some(match shape {
            Shape::Circle => circle::analyze(path),
            Shape::Star => star::analyze(path),
            Shape::Square => square::analyze(path),
            Shape::Triangle => triangle::analyze(path),
        })
    }

    pub fn score(&self, shape: Shape, path: &[Point]) -> ScoringResult {
        match self.analyze(shape, path) {
            Some(analysis) => self.grade(shape, &analysis),
            None => ScoringResult::zero(shape.too_short_message()),
        }
    }

    /// Weighted blend, ceiling ladder, clamp and rounding.
    pub fn grade(&self, shape: Shape, analysis: &ShapeAnalysis) -> ScoringResult {
        let accuracy = unit(analysis.accuracy);
        let smoothness = unit(analysis.smoothness);
        let completeness = unit(analysis.completeness);

        let w = self.weights.blend(shape);
        let raw = (accuracy * w.accuracy + smoothness * w.smoothness + completeness * w.completeness)
            * 100.0;

        let ladder = ladder::ladder_for(shape);
        let capped = ladder.apply(raw, unit(analysis.gate));
        let score = Score::from_percentage(capped);

        debug!(
            "{}: raw={:.3} gate={:.3} ceiling={:.0} final={}",
            shape,
            raw,
            analysis.gate,
            ladder.ceiling(unit(analysis.gate)),
            score
        );

        ScoringResult {
            score,
            feedback: ladder::feedback_for(shape, score.as_f64()).to_string(),
            details: ScoreDetails::from_fractions(accuracy, smoothness, completeness),
        }
    }

    pub fn score_circle(&self, path: &[Point]) -> ScoringResult {
        self.score(Shape::Circle, path)
    }

    pub fn score_star(&self, path: &[Point]) -> ScoringResult {
        self.score(Shape::Star, path)
    }

    pub fn score_square(&self, path: &[Point]) -> ScoringResult {
        self.score(Shape::Square, path)
    }

    pub fn score_triangle(&self, path: &[Point]) -> ScoringResult {
        self.score(Shape::Triangle, path)
    }
}
