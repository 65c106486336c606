use crate::geometry::{self, distance, turning_angle, Point};
use std::f64::consts::PI;

/// Zero-length steps (repeated samples) carry no heading.
const MIN_STEP: f64 = 1e-9;

pub const MIN_SMOOTHNESS_POINTS: usize = 3;
pub const MIN_COMPLETENESS_POINTS: usize = 10;

/// `1 - mean turning angle / pi` over the interior points.
///
/// Straight lines and gentle arcs score near 1; jagged strokes score lower.
pub fn smoothness(path: &[Point]) -> f64 {
    if path.len() < MIN_SMOOTHNESS_POINTS {
        return 0.0;
    }

    let (total, count) = path
        .windows(3)
        .filter_map(|w| turning_angle(w[0], w[1], w[2], MIN_STEP))
        .fold((0.0, 0usize), |(t, c), a| (t + a, c + 1));

    if count == 0 {
        return 0.0;
    }
    geometry::unit(1.0 - (total / count as f64) / PI)
}

/// How close the stroke ends to where it began, relative to its mean radius.
pub fn completeness(path: &[Point]) -> f64 {
    if path.len() < MIN_COMPLETENESS_POINTS {
        return 0.0;
    }

    let closing = distance(path[0], path[path.len() - 1]);
    let radius = geometry::mean_radius(path);
    geometry::unit(1.0 - closing / radius)
}
