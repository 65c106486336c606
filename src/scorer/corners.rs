use super::metrics;
use crate::geometry::{distance, polyline_length, turning_angle, Point};
use std::cmp::Ordering;

/// Quadrilateral extractor: `+-2` samples, 60 degrees.
pub const COARSE_WINDOW: usize = 2;
pub const COARSE_THRESHOLD: f64 = std::f64::consts::PI / 3.0;

/// Triangle extractor: `+-3` samples, 30 degrees.
pub const FINE_WINDOW: usize = 3;
pub const FINE_THRESHOLD: f64 = std::f64::consts::PI / 6.0;
/// Candidates closer than this to an accepted corner are dropped.
pub const FINE_MIN_SEPARATION: f64 = 30.0;
pub const FINE_MAX_CORNERS: usize = 3;

/// A closing gap of up to this many mean steps still closes the stroke.
pub const SEAM_STEPS: f64 = 3.0;
/// Completeness at which a stroke counts as closed whatever its step size.
pub const CLOSED_COMPLETENESS: f64 = 0.9;

const MIN_STEP: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    /// Position in the source path.
    pub index: usize,
    pub point: Point,
    /// Turning angle over the extractor window, radians.
    pub sharpness: f64,
}

/// Turning angle measured `window` samples behind and ahead of `i`.
pub fn windowed_turn(path: &[Point], i: usize, window: usize) -> Option<f64> {
    if i < window || i + window >= path.len() {
        return None;
    }
    turning_angle(path[i - window], path[i], path[i + window], MIN_STEP)
}

/// Like [`windowed_turn`], but the window wraps around the ends of `ring`.
pub fn cyclic_turn(ring: &[Point], i: usize, window: usize) -> Option<f64> {
    let m = ring.len();
    if i >= m || m <= 2 * window {
        return None;
    }
    turning_angle(
        ring[(i + m - window) % m],
        ring[i],
        ring[(i + window) % m],
        MIN_STEP,
    )
}

/// Length of the closed ring `path[..m]`, or `None` when the stroke is left open.
///
/// Trailing samples that land back on the start (within half a mean step) are
/// left out, so the seam vertex appears once.
pub fn closed_ring(path: &[Point]) -> Option<usize> {
    let n = path.len();
    if n < 4 {
        return None;
    }

    let step = polyline_length(path) / (n - 1) as f64;
    let gap = distance(path[0], path[n - 1]);
    let closed = gap <= SEAM_STEPS * step || metrics::completeness(path) >= CLOSED_COMPLETENESS;
    if !closed {
        return None;
    }

    let mut m = n;
    while m > 3 && distance(path[m - 1], path[0]) < 0.5 * step {
        m -= 1;
    }
    Some(m)
}

/// `(index, turn)` for every sample with a full window, in scan order.
///
/// A closed stroke is scanned as a ring starting at its straightest sample, so
/// no vertex is split across the seam.
fn turns(path: &[Point], window: usize) -> Vec<(usize, f64)> {
    match closed_ring(path) {
        Some(m) if m > 2 * window => {
            let ring = &path[..m];
            let mut found: Vec<(usize, f64)> = (0..m)
                .filter_map(|i| cyclic_turn(ring, i, window).map(|a| (i, a)))
                .collect();
            let straightest = found
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
                .map_or(0, |(k, _)| k);
            found.rotate_left(straightest);
            found
        }
        _ => (window..path.len().saturating_sub(window))
            .filter_map(|i| windowed_turn(path, i, window).map(|a| (i, a)))
            .collect(),
    }
}

fn candidates(path: &[Point], window: usize, threshold: f64) -> impl Iterator<Item = Corner> + '_ {
    turns(path, window)
        .into_iter()
        .filter(move |&(_, a)| a > threshold)
        .map(move |(i, sharpness)| Corner {
            index: i,
            point: path[i],
            sharpness,
        })
}

/// Every sample whose windowed turn exceeds 60 degrees, unfiltered, in path order.
pub fn coarse_corners(path: &[Point]) -> Vec<Corner> {
    let mut found: Vec<Corner> = candidates(path, COARSE_WINDOW, COARSE_THRESHOLD).collect();
    found.sort_by_key(|c| c.index);
    found
}

/// At most three well-separated corners, sharpest first, returned in path order.
pub fn fine_corners(path: &[Point]) -> Vec<Corner> {
    let mut accepted: Vec<Corner> = Vec::new();
    for c in candidates(path, FINE_WINDOW, FINE_THRESHOLD) {
        let crowded = accepted
            .iter()
            .any(|a| distance(a.point, c.point) < FINE_MIN_SEPARATION);
        if !crowded {
            accepted.push(c);
        }
    }

    if accepted.len() > FINE_MAX_CORNERS {
        // Stable sort: equal sharpness keeps scan order.
        accepted.sort_by(|a, b| {
            b.sharpness
                .partial_cmp(&a.sharpness)
                .unwrap_or(Ordering::Equal)
        });
        accepted.truncate(FINE_MAX_CORNERS);
    }
    accepted.sort_by_key(|c| c.index);
    accepted
}

pub fn points(corners: &[Corner]) -> Vec<Point> {
    corners.iter().map(|c| c.point).collect()
}

/// Samples from each corner to the next, the last run wrapping through the stroke start.
pub fn edge_runs(path: &[Point], corners: &[Corner]) -> Vec<Vec<Point>> {
    let k = corners.len();
    if k < 2 {
        return Vec::new();
    }

    let mut runs: Vec<Vec<Point>> = corners
        .windows(2)
        .map(|w| path[w[0].index..=w[1].index].to_vec())
        .collect();

    let mut wrap = path[corners[k - 1].index..].to_vec();
    wrap.extend_from_slice(&path[..=corners[0].index]);
    runs.push(wrap);
    runs
}
