//! Circle analysis: how well the stroke's own perimeter and radius reproduce pi.

use super::metrics;
use super::types::ShapeAnalysis;
use crate::geometry::{self, centroid, distance, mean, radii, Point};
use std::f64::consts::PI;
use tracing::debug;

/// Coefficient of variation at which radius consistency has decayed to `1/e`.
const RADIUS_CV_DECAY: f64 = 0.2;
/// Relative pi error at which pi accuracy has decayed to `1/e`.
const PI_ERROR_DECAY: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CircleFeatures {
    pub mean_radius: f64,
    pub perimeter: f64,
    pub radius_consistency: f64,
    pub circumference_ratio: f64,
    /// `perimeter / diameter`.
    pub implied_pi: f64,
    pub pi_accuracy: f64,
}

impl CircleFeatures {
    pub fn measure(path: &[Point]) -> Self {
        let center = centroid(path);
        let rs = radii(path, center);
        let mean_radius = mean(&rs);
        let cv = geometry::coefficient_of_variation(&rs);
        let radius_consistency = geometry::unit((-cv / RADIUS_CV_DECAY).exp());

        // Traced length plus the closing gap.
        let mut perimeter = geometry::polyline_length(path);
        if path.len() > 2 {
            perimeter += distance(path[path.len() - 1], path[0]);
        }

        let theoretical = 2.0 * PI * mean_radius;
        let circumference_ratio = geometry::unit(perimeter.min(theoretical) / perimeter.max(theoretical));

        let implied_pi = perimeter / (2.0 * mean_radius);
        let pi_accuracy = pi_accuracy(implied_pi);

        Self {
            mean_radius,
            perimeter,
            radius_consistency,
            circumference_ratio,
            implied_pi,
            pi_accuracy,
        }
    }

    /// Weighted circularity; the pi estimate dominates.
    pub fn circularity(&self) -> f64 {
        circularity(
            self.radius_consistency,
            self.circumference_ratio,
            self.pi_accuracy,
        )
    }
}

/// Exponential falloff on the relative error of the implied pi.
pub fn pi_accuracy(implied_pi: f64) -> f64 {
    let relative_error = (implied_pi - PI).abs() / PI;
    geometry::unit((-relative_error / PI_ERROR_DECAY).exp())
}

pub fn circularity(radius_consistency: f64, circumference_ratio: f64, pi_accuracy: f64) -> f64 {
    geometry::unit(
        geometry::unit(radius_consistency) * 0.30
            + geometry::unit(circumference_ratio) * 0.20
            + geometry::unit(pi_accuracy) * 0.50,
    )
}

pub fn analyze(path: &[Point]) -> ShapeAnalysis {
    let f = CircleFeatures::measure(path);
    let accuracy = f.circularity();

    debug!(
        "circle: r={:.2} perimeter={:.2} pi~{:.4} consistency={:.3} ratio={:.3} pi_acc={:.3}",
        f.mean_radius,
        f.perimeter,
        f.implied_pi,
        f.radius_consistency,
        f.circumference_ratio,
        f.pi_accuracy
    );

    ShapeAnalysis {
        accuracy,
        gate: accuracy,
        smoothness: metrics::smoothness(path),
        completeness: metrics::completeness(path),
        features: vec![
            ("mean_radius", f.mean_radius),
            ("perimeter", f.perimeter),
            ("implied_pi", f.implied_pi),
            ("radius_consistency", f.radius_consistency),
            ("circumference_ratio", f.circumference_ratio),
            ("pi_accuracy", f.pi_accuracy),
            ("circularity", accuracy),
        ],
    }
}
