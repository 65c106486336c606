//! shapescore: grade freehand strokes against a target shape.
//!
//! A stroke is an ordered slice of sampled [`Point`]s. Each of the four
//! analyzers turns it into a [`ScoringResult`]: a fixed-point score in
//! `[0.000, 100.000]`, a feedback line, and three integer sub-scores.
//!
//! ```
//! use shapescore::{score, synth, Shape};
//!
//! let stroke = synth::circle(150.0, 64);
//! let result = score(Shape::Circle, &stroke);
//! assert!(result.score.as_f64() >= 95.0);
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod ranking;
pub mod scorer;
pub mod shapes;
pub mod synth;

pub use error::{ShapeScoreError, SsResult};
pub use geometry::Point;
pub use scorer::types::{Score, ScoreDetails, ScoringResult};
pub use scorer::Scorer;
pub use shapes::Shape;

/// Scores `path` as a circle with the default weights.
pub fn score_circle(path: &[Point]) -> ScoringResult {
    Scorer::default().score_circle(path)
}

/// Scores `path` as a five-pointed star with the default weights.
pub fn score_star(path: &[Point]) -> ScoringResult {
    Scorer::default().score_star(path)
}

/// Scores `path` as a square with the default weights.
pub fn score_square(path: &[Point]) -> ScoringResult {
    Scorer::default().score_square(path)
}

/// Scores `path` as an equilateral triangle with the default weights.
pub fn score_triangle(path: &[Point]) -> ScoringResult {
    Scorer::default().score_triangle(path)
}

/// Dispatches to the analyzer for `shape`.
pub fn score(shape: Shape, path: &[Point]) -> ScoringResult {
    Scorer::default().score(shape, path)
}
