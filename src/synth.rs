//! Synthetic strokes for demos, benchmarks and tests.
//!
//! Polygon outlines are sampled evenly per edge with every vertex landing on a
//! sample, and end back on the start point the way a closed hand-drawn stroke
//! does. [`polygon`] starts halfway along the first edge; [`polygon_from_vertex`]
//! starts on the first vertex.

use crate::geometry::Point;
use crate::shapes::Shape;
use std::f64::consts::PI;

/// `n` evenly spaced samples on a circle around the origin, not closed.
pub fn circle(radius: f64, n: usize) -> Vec<Point> {
    circle_at(Point::new(0.0, 0.0), radius, n)
}

pub fn circle_at(center: Point, radius: f64, n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 2.0 * PI / n as f64;
            Point::new(center.x + radius * t.cos(), center.y + radius * t.sin())
        })
        .collect()
}

/// Axis-aligned ellipse, `n` samples by parameter, not closed.
pub fn ellipse(rx: f64, ry: f64, n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 2.0 * PI / n as f64;
            Point::new(rx * t.cos(), ry * t.sin())
        })
        .collect()
}

/// Closed outline through `vertices`, `per_edge` samples per edge, starting mid-edge.
pub fn polygon(vertices: &[Point], per_edge: usize) -> Vec<Point> {
    if vertices.len() < 2 || per_edge == 0 {
        return vertices.to_vec();
    }

    let mut samples = outline(vertices, per_edge);
    samples.rotate_left(per_edge / 2);
    samples.push(samples[0]);
    samples
}

/// Like [`polygon`], but the stroke starts and ends on `vertices[0]`.
pub fn polygon_from_vertex(vertices: &[Point], per_edge: usize) -> Vec<Point> {
    if vertices.len() < 2 || per_edge == 0 {
        return vertices.to_vec();
    }

    let mut samples = outline(vertices, per_edge);
    samples.push(samples[0]);
    samples
}

fn outline(vertices: &[Point], per_edge: usize) -> Vec<Point> {
    let m = vertices.len();
    let mut samples = Vec::with_capacity(m * per_edge + 1);
    for k in 0..m {
        let a = vertices[k];
        let b = vertices[(k + 1) % m];
        for j in 0..per_edge {
            let t = j as f64 / per_edge as f64;
            samples.push(Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t));
        }
    }
    samples
}

/// Vertices of a regular `n`-gon, the first at polar angle `rotation`.
pub fn regular_vertices(n: usize, radius: f64, rotation: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = rotation + i as f64 * 2.0 * PI / n as f64;
            Point::new(radius * t.cos(), radius * t.sin())
        })
        .collect()
}

/// Outline of a regular pentagram: ten vertices alternating tip and notch.
pub fn pentagram(outer_radius: f64, per_edge: usize) -> Vec<Point> {
    let inner_radius = outer_radius * (2.0 * PI / 5.0).cos() / (PI / 5.0).cos();
    let vertices: Vec<Point> = (0..10)
        .map(|i| {
            let t = PI / 2.0 + i as f64 * PI / 5.0;
            let r = if i % 2 == 0 { outer_radius } else { inner_radius };
            Point::new(r * t.cos(), r * t.sin())
        })
        .collect();
    polygon(&vertices, per_edge)
}

pub fn square(side: f64, per_edge: usize) -> Vec<Point> {
    rectangle(side, side, per_edge)
}

pub fn rectangle(width: f64, height: f64, per_edge: usize) -> Vec<Point> {
    let vertices = [
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(width, height),
        Point::new(0.0, height),
    ];
    polygon(&vertices, per_edge)
}

/// Parallelogram with equal sides and the given acute angle, in degrees.
pub fn rhombus(side: f64, acute_deg: f64, per_edge: usize) -> Vec<Point> {
    let a = acute_deg.to_radians();
    let (dx, dy) = (side * a.cos(), side * a.sin());
    let vertices = [
        Point::new(0.0, 0.0),
        Point::new(side, 0.0),
        Point::new(side + dx, dy),
        Point::new(dx, dy),
    ];
    polygon(&vertices, per_edge)
}

pub fn equilateral_triangle(side: f64, per_edge: usize) -> Vec<Point> {
    let vertices = [
        Point::new(0.0, 0.0),
        Point::new(side, 0.0),
        Point::new(side / 2.0, side * 3f64.sqrt() / 2.0),
    ];
    polygon(&vertices, per_edge)
}

/// Isosceles triangle on `base` with the given base angles, in degrees.
pub fn isosceles_triangle(base: f64, base_angle_deg: f64, per_edge: usize) -> Vec<Point> {
    let h = base / 2.0 * base_angle_deg.to_radians().tan();
    let vertices = [
        Point::new(0.0, 0.0),
        Point::new(base, 0.0),
        Point::new(base / 2.0, h),
    ];
    polygon(&vertices, per_edge)
}

/// A straight stroke from `a` to `b` with `n` samples.
pub fn line(a: Point, b: Point, n: usize) -> Vec<Point> {
    let steps = n.saturating_sub(1).max(1) as f64;
    (0..n)
        .map(|i| {
            let t = i as f64 / steps;
            Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
        })
        .collect()
}

/// The reference stroke used by the demo for each shape.
pub fn ideal(shape: Shape) -> Vec<Point> {
    match shape {
        Shape::Circle => circle(150.0, 64),
        Shape::Star => pentagram(150.0, 8),
        Shape::Square => square(200.0, 20),
        Shape::Triangle => equilateral_triangle(320.0, 10),
    }
}

/// Offsets every sample by up to `amount` on each axis.
///
/// A fixed `seed` makes the result reproducible.
pub fn jitter(path: &[Point], amount: f64, seed: Option<u64>) -> Vec<Point> {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    path.iter()
        .map(|p| {
            Point::new(
                p.x + (rng.f64() * 2.0 - 1.0) * amount,
                p.y + (rng.f64() * 2.0 - 1.0) * amount,
            )
        })
        .collect()
}
