//! Square analysis over the coarse corner set.

use super::corners::{self, Corner};
use super::metrics;
use super::types::ShapeAnalysis;
use crate::geometry::{self, distance, interior_angle, point_to_line_distance, Point};
use tracing::debug;

pub const IDEAL_CORNERS: usize = 4;
/// Mean edge deviation (units) that zeroes straightness.
pub const DEVIATION_BUDGET: f64 = 20.0;
pub const RIGHT_ANGLE_TOLERANCE_DEG: f64 = 5.0;
const RIGHT_ANGLE_DECAY_DEG: f64 = 15.0;
const ANGLE_SUM_TOLERANCE_DEG: f64 = 10.0;
const ANGLE_SUM_DECAY_DEG: f64 = 30.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SquareFeatures {
    pub corners: Vec<Corner>,
    pub corner_accuracy: f64,
    pub straightness: f64,
    pub right_angle_accuracy: f64,
    pub length_balance: f64,
    pub aspect_accuracy: f64,
}

impl SquareFeatures {
    pub fn measure(path: &[Point]) -> Self {
        let corners = corners::coarse_corners(path);
        let pts = corners::points(&corners);
        let count = corners.len();

        let corner_accuracy = geometry::unit(
            1.0 - (count as f64 - IDEAL_CORNERS as f64).abs() / IDEAL_CORNERS as f64,
        );

        Self {
            corner_accuracy,
            straightness: edge_straightness(path, &corners),
            right_angle_accuracy: right_angle_accuracy(&pts),
            length_balance: length_balance(&pts),
            aspect_accuracy: aspect_accuracy(&pts),
            corners,
        }
    }

    pub fn accuracy(&self) -> f64 {
        geometry::unit(
            self.corner_accuracy * 0.20
                + self.straightness * 0.20
                + self.right_angle_accuracy * 0.40
                + self.length_balance * 0.10
                + self.aspect_accuracy * 0.10,
        )
    }

    pub fn gate(&self) -> f64 {
        self.right_angle_accuracy.min(self.corner_accuracy)
    }
}

/// Mean perpendicular deviation of each edge's samples, normalised by the budget.
pub fn edge_straightness(path: &[Point], corners: &[Corner]) -> f64 {
    let k = corners.len();
    let deviations: Vec<f64> = corners::edge_runs(path, corners)
        .iter()
        .enumerate()
        .filter(|(_, samples)| samples.len() > 2)
        .filter_map(|(i, samples)| {
            let start = corners[i].point;
            let end = corners[(i + 1) % k].point;
            let dev = samples
                .iter()
                .map(|&p| point_to_line_distance(p, start, end))
                .sum::<f64>()
                / samples.len() as f64;
            dev.is_finite().then_some(dev)
        })
        .collect();

    if deviations.is_empty() {
        return 0.0;
    }
    let avg = geometry::mean(&deviations);
    geometry::unit(1.0 - (avg / DEVIATION_BUDGET).min(1.0))
}

/// Per-vertex falloff from 90 degrees, damped when the four angles miss 360.
pub fn right_angle_accuracy(corners: &[Point]) -> f64 {
    if corners.len() != IDEAL_CORNERS {
        return 0.0;
    }

    let n = corners.len();
    let angles: Vec<f64> = (0..n)
        .filter_map(|i| {
            interior_angle(corners[(i + n - 1) % n], corners[i], corners[(i + 1) % n])
        })
        .map(f64::to_degrees)
        .collect();

    if angles.is_empty() {
        return 0.0;
    }

    let per_vertex = angles
        .iter()
        .map(|a| geometry::falloff(a - 90.0, RIGHT_ANGLE_TOLERANCE_DEG, RIGHT_ANGLE_DECAY_DEG))
        .sum::<f64>()
        / angles.len() as f64;

    let sum_check = if angles.len() == n {
        let total: f64 = angles.iter().sum();
        geometry::falloff(total - 360.0, ANGLE_SUM_TOLERANCE_DEG, ANGLE_SUM_DECAY_DEG)
    } else {
        0.0
    };

    geometry::unit(per_vertex * (0.75 + 0.25 * sum_check))
}

fn side_lengths(corners: &[Point]) -> Vec<f64> {
    let n = corners.len();
    (0..n)
        .map(|i| distance(corners[i], corners[(i + 1) % n]))
        .collect()
}

/// `1 - CV` of the four side lengths.
pub fn length_balance(corners: &[Point]) -> f64 {
    if corners.len() != IDEAL_CORNERS {
        return 0.0;
    }
    geometry::unit(1.0 - geometry::coefficient_of_variation(&side_lengths(corners)))
}

/// Diagonal ratio and width/height ratio, both ideally 1.
pub fn aspect_accuracy(corners: &[Point]) -> f64 {
    if corners.len() != IDEAL_CORNERS {
        return 0.0;
    }

    let d1 = distance(corners[0], corners[2]);
    let d2 = distance(corners[1], corners[3]);
    let diagonal_ratio = geometry::unit(d1.min(d2) / d1.max(d2));

    let sides = side_lengths(corners);
    let width = (sides[0] + sides[2]) / 2.0;
    let height = (sides[1] + sides[3]) / 2.0;
    let side_ratio = geometry::unit(width.min(height) / width.max(height));

    diagonal_ratio * 0.4 + side_ratio * 0.6
}

pub fn analyze(path: &[Point]) -> ShapeAnalysis {
    let f = SquareFeatures::measure(path);
    let accuracy = f.accuracy();

    debug!(
        "square: corners={} straight={:.3} right={:.3} balance={:.3} aspect={:.3}",
        f.corners.len(),
        f.straightness,
        f.right_angle_accuracy,
        f.length_balance,
        f.aspect_accuracy
    );

    ShapeAnalysis {
        accuracy,
        gate: f.gate(),
        smoothness: metrics::smoothness(path),
        completeness: metrics::completeness(path),
        features: vec![
            ("corners", f.corners.len() as f64),
            ("corner_accuracy", f.corner_accuracy),
            ("straightness", f.straightness),
            ("right_angle_accuracy", f.right_angle_accuracy),
            ("length_balance", f.length_balance),
            ("aspect_accuracy", f.aspect_accuracy),
        ],
    }
}
