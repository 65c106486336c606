//! Five-pointed star analysis, driven by the radius profile around the centroid.

use super::corners;
use super::metrics;
use super::types::ShapeAnalysis;
use crate::geometry::{self, centroid, distance, mean, polar_angle, radii, Point};
use std::f64::consts::PI;
use tracing::debug;

pub const IDEAL_PEAKS: usize = 5;
/// A peak must stand this far (relative) above the mean of its four neighbours.
pub const PEAK_PROMINENCE: f64 = 0.10;
/// `1 / phi`: relative depth of the notches of a regular pentagram.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;

const RATIO_DECAY: f64 = 0.25;
/// Per-radian decay for peak spacing errors.
const SPACING_DECAY_RATE: f64 = 2.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarFeatures {
    pub peaks: Vec<usize>,
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// `1 - inner / outer`.
    pub depth: f64,
    pub peak_count_accuracy: f64,
    pub ratio_accuracy: f64,
    pub angle_consistency: f64,
    pub symmetry: f64,
}

impl StarFeatures {
    pub fn measure(path: &[Point]) -> Self {
        let center = centroid(path);
        let rs = radii(path, center);
        let peaks = match corners::closed_ring(path) {
            Some(m) => find_cyclic_peaks(&rs[..m]),
            None => find_peaks(&rs),
        };

        let (outer_radius, inner_radius) = outer_inner_radii(&rs, &peaks);
        let depth = 1.0 - inner_radius / outer_radius;
        let ratio_accuracy = geometry::unit(
            (-((depth - GOLDEN_RATIO_CONJUGATE).abs() / GOLDEN_RATIO_CONJUGATE) / RATIO_DECAY)
                .exp(),
        );

        let peak_points: Vec<Point> = peaks.iter().map(|&i| path[i]).collect();

        Self {
            peak_count_accuracy: peak_count_accuracy(peaks.len()),
            angle_consistency: angle_consistency(&peak_points, center),
            symmetry: symmetry(&peak_points, center),
            peaks,
            outer_radius,
            inner_radius,
            depth,
            ratio_accuracy,
        }
    }

    pub fn accuracy(&self) -> f64 {
        geometry::unit(
            self.peak_count_accuracy * 0.15
                + self.ratio_accuracy * 0.35
                + self.angle_consistency * 0.35
                + self.symmetry * 0.15,
        )
    }

    /// The weaker of the two defining features.
    pub fn gate(&self) -> f64 {
        self.ratio_accuracy.min(self.angle_consistency)
    }
}

fn is_peak(r: f64, neighbours: [f64; 4]) -> bool {
    if !neighbours.iter().all(|&n| r > n) {
        return false;
    }
    let avg = neighbours.iter().sum::<f64>() / 4.0;
    (r - avg) / r > PEAK_PROMINENCE
}

/// Indices whose radius beats both neighbours on each side, with prominence.
pub fn find_peaks(radii: &[f64]) -> Vec<usize> {
    if radii.len() < 5 {
        return Vec::new();
    }

    (2..radii.len() - 2)
        .filter(|&i| {
            is_peak(
                radii[i],
                [radii[i - 2], radii[i - 1], radii[i + 1], radii[i + 2]],
            )
        })
        .collect()
}

/// [`find_peaks`] over a closed ring: neighbours wrap around the seam.
pub fn find_cyclic_peaks(radii: &[f64]) -> Vec<usize> {
    let m = radii.len();
    if m < 5 {
        return Vec::new();
    }

    (0..m)
        .filter(|&i| {
            is_peak(
                radii[i],
                [
                    radii[(i + m - 2) % m],
                    radii[(i + m - 1) % m],
                    radii[(i + 1) % m],
                    radii[(i + 2) % m],
                ],
            )
        })
        .collect()
}

/// Mean peak radius and mean notch radius (deepest sample between peaks).
///
/// Without peaks this falls back to the extreme radii.
fn outer_inner_radii(radii: &[f64], peaks: &[usize]) -> (f64, f64) {
    let min_of = |slice: &[f64]| slice.iter().copied().fold(f64::INFINITY, f64::min);

    if peaks.is_empty() {
        let max = radii.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        return (max, min_of(radii));
    }

    let outer = mean(&peaks.iter().map(|&i| radii[i]).collect::<Vec<_>>());

    let mut notches: Vec<f64> = peaks
        .windows(2)
        .map(|w| min_of(&radii[w[0] + 1..w[1]]))
        .collect();

    // The stretch before the first peak joins the one after the last.
    let first = peaks[0];
    let last = peaks[peaks.len() - 1];
    let wrap = min_of(&radii[..first]).min(min_of(&radii[last + 1..]));
    notches.push(wrap);

    let notches: Vec<f64> = notches.into_iter().filter(|v| v.is_finite()).collect();
    if notches.is_empty() {
        return (outer, min_of(radii));
    }
    (outer, mean(&notches))
}

pub fn peak_count_accuracy(count: usize) -> f64 {
    let diff = (count as f64 - IDEAL_PEAKS as f64).abs();
    geometry::unit(1.0 - diff / IDEAL_PEAKS as f64)
}

/// Gaps between polar angles of the peaks against the ideal 72 degrees.
pub fn angle_consistency(peaks: &[Point], center: Point) -> f64 {
    if peaks.len() < 3 {
        return 0.0;
    }

    let mut angles: Vec<f64> = peaks.iter().map(|&p| polar_angle(p, center)).collect();
    angles.sort_by(|a, b| a.total_cmp(b));

    let expected = 2.0 * PI / IDEAL_PEAKS as f64;
    let n = angles.len();
    let total: f64 = (0..n)
        .map(|i| {
            let mut gap = angles[(i + 1) % n] - angles[i];
            if gap <= 0.0 {
                gap += 2.0 * PI;
            }
            (-(gap - expected).abs() * SPACING_DECAY_RATE).exp()
        })
        .sum();

    geometry::unit(total / n as f64)
}

/// Uniformity of the peak distances from the centre. Needs all five peaks.
pub fn symmetry(peaks: &[Point], center: Point) -> f64 {
    if peaks.len() < IDEAL_PEAKS {
        return 0.0;
    }
    let dists: Vec<f64> = peaks.iter().map(|&p| distance(p, center)).collect();
    let avg = mean(&dists);
    let spread = dists.iter().map(|d| (d - avg).abs() / avg).sum::<f64>() / dists.len() as f64;
    geometry::unit(1.0 - spread)
}

pub fn analyze(path: &[Point]) -> ShapeAnalysis {
    let f = StarFeatures::measure(path);
    let accuracy = f.accuracy();

    debug!(
        "star: peaks={} depth={:.3} ratio_acc={:.3} spacing={:.3} symmetry={:.3}",
        f.peaks.len(),
        f.depth,
        f.ratio_accuracy,
        f.angle_consistency,
        f.symmetry
    );

    ShapeAnalysis {
        accuracy,
        gate: f.gate(),
        smoothness: metrics::smoothness(path),
        completeness: metrics::completeness(path),
        features: vec![
            ("peaks", f.peaks.len() as f64),
            ("outer_radius", f.outer_radius),
            ("inner_radius", f.inner_radius),
            ("depth", f.depth),
            ("peak_count_accuracy", f.peak_count_accuracy),
            ("ratio_accuracy", f.ratio_accuracy),
            ("angle_consistency", f.angle_consistency),
            ("symmetry", f.symmetry),
        ],
    }
}
