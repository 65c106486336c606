//! Equilateral triangle analysis over the fine corner set.

use super::corners::{self, Corner};
use super::metrics;
use super::types::ShapeAnalysis;
use crate::geometry::{self, centroid, distance, interior_angle, triangle_area, Point};
use tracing::debug;

pub const IDEAL_CORNERS: usize = 3;
/// Interior samples an edge needs before its straightness counts.
pub const MIN_EDGE_SAMPLES: usize = 3;
pub const DEVIATION_BUDGET: f64 = 10.0;
/// Longest:shortest side ratio at which proportion credit reaches zero.
pub const MAX_SIDE_RATIO: f64 = 3.0;
const EQUILATERAL_COMPACTNESS: f64 = 0.048_112_522_432_468_81; // sqrt(3) / 36
const ANGLE_TOLERANCE_DEG: f64 = 5.0;
const ANGLE_DECAY_DEG: f64 = 15.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleFeatures {
    pub corners: Vec<Corner>,
    pub corner_accuracy: f64,
    pub straightness: f64,
    pub proportion: f64,
    pub angle_accuracy: f64,
    pub symmetry: f64,
}

impl TriangleFeatures {
    pub fn measure(path: &[Point]) -> Self {
        let corners = corners::fine_corners(path);
        let pts = corners::points(&corners);
        let count = corners.len();

        let corner_accuracy = if count == IDEAL_CORNERS {
            1.0
        } else {
            geometry::unit(
                1.0 - (count as f64 - IDEAL_CORNERS as f64).abs() / IDEAL_CORNERS as f64,
            )
        };

        Self {
            corner_accuracy,
            straightness: edge_straightness(path, &corners),
            proportion: proportion(&pts),
            angle_accuracy: angle_accuracy(&pts),
            symmetry: symmetry(&pts),
            corners,
        }
    }

    pub fn accuracy(&self) -> f64 {
        geometry::unit(
            self.corner_accuracy * 0.15
                + self.straightness * 0.20
                + self.proportion * 0.15
                + self.angle_accuracy * 0.40
                + self.symmetry * 0.10,
        )
    }

    pub fn gate(&self) -> f64 {
        self.angle_accuracy.min(self.corner_accuracy)
    }
}

/// Mean deviation of each edge run from its own best-fit line.
///
/// The first and last `FINE_WINDOW` samples of a run belong to the corner's
/// window and are left out, so a corner placed a sample early does not tilt
/// the edge. Falls back to smoothness when no edge has enough samples.
pub fn edge_straightness(path: &[Point], corners: &[Corner]) -> f64 {
    if corners.len() != IDEAL_CORNERS {
        return 0.0;
    }

    let trim = corners::FINE_WINDOW;
    let deviations: Vec<f64> = corners::edge_runs(path, corners)
        .iter()
        .filter_map(|run| {
            let inner = run.get(trim..run.len().saturating_sub(trim))?;
            if inner.len() < MIN_EDGE_SAMPLES {
                return None;
            }
            let dev = geometry::line_fit_deviation(inner);
            dev.is_finite().then_some(dev)
        })
        .collect();

    if deviations.is_empty() {
        return metrics::smoothness(path);
    }
    let avg = geometry::mean(&deviations);
    geometry::unit(1.0 - (avg / DEVIATION_BUDGET).min(1.0))
}

fn sides(corners: &[Point]) -> [f64; 3] {
    [
        distance(corners[0], corners[1]),
        distance(corners[1], corners[2]),
        distance(corners[2], corners[0]),
    ]
}

/// Side-ratio credit blended with area / perimeter^2 against the equilateral value.
pub fn proportion(corners: &[Point]) -> f64 {
    if corners.len() != IDEAL_CORNERS {
        return 0.0;
    }

    let s = sides(corners);
    let longest = s.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let shortest = s.iter().copied().fold(f64::INFINITY, f64::min);
    let ratio_score = geometry::unit(1.0 - (longest / shortest - 1.0) / (MAX_SIDE_RATIO - 1.0));

    let perimeter: f64 = s.iter().sum();
    let area = triangle_area(corners[0], corners[1], corners[2]);
    let area_score = geometry::unit(area / (perimeter * perimeter) / EQUILATERAL_COMPACTNESS);

    ratio_score * 0.7 + area_score * 0.3
}

/// Per-vertex falloff from 60 degrees, damped when the angles miss 180.
pub fn angle_accuracy(corners: &[Point]) -> f64 {
    if corners.len() != IDEAL_CORNERS {
        return 0.0;
    }

    let angles: Vec<f64> = (0..IDEAL_CORNERS)
        .filter_map(|i| {
            interior_angle(
                corners[(i + IDEAL_CORNERS - 1) % IDEAL_CORNERS],
                corners[i],
                corners[(i + 1) % IDEAL_CORNERS],
            )
        })
        .map(f64::to_degrees)
        .collect();

    // Unmeasurable vertices count as zero.
    let per_vertex = angles
        .iter()
        .map(|a| geometry::falloff(a - 60.0, ANGLE_TOLERANCE_DEG, ANGLE_DECAY_DEG))
        .sum::<f64>()
        / IDEAL_CORNERS as f64;

    let sum_check = if angles.len() == IDEAL_CORNERS {
        let total: f64 = angles.iter().sum();
        geometry::falloff(total - 180.0, ANGLE_TOLERANCE_DEG, ANGLE_DECAY_DEG)
    } else {
        0.0
    };

    geometry::unit(per_vertex * (0.75 + 0.25 * sum_check))
}

/// Equal sides and equal vertex distances from the triangle's centroid.
pub fn symmetry(corners: &[Point]) -> f64 {
    if corners.len() != IDEAL_CORNERS {
        return 0.0;
    }

    let side_cv = geometry::coefficient_of_variation(&sides(corners));
    let center = centroid(corners);
    let radius_cv = geometry::coefficient_of_variation(&geometry::radii(corners, center));
    geometry::unit(1.0 - 0.5 * (side_cv + radius_cv))
}

pub fn analyze(path: &[Point]) -> ShapeAnalysis {
    let f = TriangleFeatures::measure(path);
    let accuracy = f.accuracy();

    debug!(
        "triangle: corners={} straight={:.3} proportion={:.3} angles={:.3} symmetry={:.3}",
        f.corners.len(),
        f.straightness,
        f.proportion,
        f.angle_accuracy,
        f.symmetry
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
            ("proportion", f.proportion),
            ("angle_accuracy", f.angle_accuracy),
            ("symmetry", f.symmetry),
        ],
    }
}
