use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Arms shorter than this are treated as degenerate when measuring an angle.
pub const MIN_ARM_LENGTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Arithmetic mean of all coordinates.
///
/// An empty path yields NaN coordinates; callers check the minimum length first.
pub fn centroid(path: &[Point]) -> Point {
    let n = path.len() as f64;
    let (sx, sy) = path
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Distance of every point from `center`, in path order.
pub fn radii(path: &[Point], center: Point) -> Vec<f64> {
    path.iter().map(|&p| distance(p, center)).collect()
}

/// Mean distance of the path from its own centroid.
pub fn mean_radius(path: &[Point]) -> f64 {
    let center = centroid(path);
    mean(&radii(path, center))
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// NaN when `a == b`.
pub fn point_to_line_distance(p: Point, a: Point, b: Point) -> f64 {
    let ca = b.y - a.y;
    let cb = a.x - b.x;
    let cc = b.x * a.y - a.x * b.y;
    (ca * p.x + cb * p.y + cc).abs() / (ca * ca + cb * cb).sqrt()
}

/// Unsigned change of heading at `curr`, in radians `[0, pi]`.
///
/// Returns `None` when either direction vector is not longer than `min_len`.
pub fn turning_angle(prev: Point, curr: Point, next: Point, min_len: f64) -> Option<f64> {
    let (ix, iy) = (curr.x - prev.x, curr.y - prev.y);
    let (ox, oy) = (next.x - curr.x, next.y - curr.y);
    if (ix * ix + iy * iy).sqrt() <= min_len || (ox * ox + oy * oy).sqrt() <= min_len {
        return None;
    }

    let mut diff = (oy.atan2(ox) - iy.atan2(ix)).abs();
    if diff > PI {
        diff = 2.0 * PI - diff;
    }
    diff.is_finite().then_some(diff)
}

/// Angle at `vertex` between the arms towards `a` and `b`, in radians `[0, pi]`.
pub fn interior_angle(a: Point, vertex: Point, b: Point) -> Option<f64> {
    let (ux, uy) = (a.x - vertex.x, a.y - vertex.y);
    let (vx, vy) = (b.x - vertex.x, b.y - vertex.y);
    let mu = (ux * ux + uy * uy).sqrt();
    let mv = (vx * vx + vy * vy).sqrt();
    if mu <= MIN_ARM_LENGTH || mv <= MIN_ARM_LENGTH {
        return None;
    }

    let cos = ((ux * vx + uy * vy) / (mu * mv)).clamp(-1.0, 1.0);
    let angle = cos.acos();
    angle.is_finite().then_some(angle)
}

/// Polar angle of `p` around `center`, in radians `(-pi, pi]`.
pub fn polar_angle(p: Point, center: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation divided by the mean.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt() / m
}

/// Sum of the lengths of consecutive segments.
pub fn polyline_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Mean perpendicular distance of `points` from their total-least-squares line.
///
/// The line runs through the centroid along the principal axis. NaN when empty.
pub fn line_fit_deviation(points: &[Point]) -> f64 {
    let c = centroid(points);
    let (sxx, syy, sxy) = points.iter().fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), p| {
        let (dx, dy) = (p.x - c.x, p.y - c.y);
        (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
    });
    let theta = 0.5 * (2.0 * sxy).atan2(sxx - syy);
    let (nx, ny) = (-theta.sin(), theta.cos());
    points
        .iter()
        .map(|p| ((p.x - c.x) * nx + (p.y - c.y) * ny).abs())
        .sum::<f64>()
        / points.len() as f64
}

/// Area of the triangle `abc` (shoelace).
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    ((a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)) / 2.0).abs()
}

/// Maps a value onto `[0, 1]`; anything non-finite counts as zero.
pub fn unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Full credit inside `tolerance`, exponential decay beyond it.
pub fn falloff(deviation: f64, tolerance: f64, decay: f64) -> f64 {
    if !deviation.is_finite() {
        return 0.0;
    }
    let excess = (deviation.abs() - tolerance).max(0.0);
    unit((-excess / decay).exp())
}
