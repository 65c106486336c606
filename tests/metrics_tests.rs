use rstest::rstest;
use shapescore::geometry::Point;
use shapescore::scorer::corners::{
    self, closed_ring, coarse_corners, cyclic_turn, fine_corners, windowed_turn,
};
use shapescore::scorer::metrics::{completeness, smoothness};
use shapescore::scorer::star;
use shapescore::synth;
use std::f64::consts::PI;

const SQUARE_VERTICES: [Point; 4] = [
    Point::new(0.0, 0.0),
    Point::new(200.0, 0.0),
    Point::new(200.0, 200.0),
    Point::new(0.0, 200.0),
];

// --- SMOOTHNESS ---

#[test]
fn test_straight_line_is_perfectly_smooth() {
    let line = synth::line(Point::new(0.0, 0.0), Point::new(100.0, 50.0), 20);
    assert!((smoothness(&line) - 1.0).abs() < 1e-9);
}

#[test]
fn test_zigzag_is_rough() {
    let zigzag: Vec<Point> = (0..20)
        .map(|i| Point::new(i as f64 * 10.0, if i % 2 == 0 { 0.0 } else { 10.0 }))
        .collect();
    // Every interior sample turns 90 degrees.
    assert!((smoothness(&zigzag) - 0.5).abs() < 1e-9);
}

#[test]
fn test_dense_circle_is_smoother_than_coarse_circle() {
    let dense = smoothness(&synth::circle(100.0, 200));
    let coarse = smoothness(&synth::circle(100.0, 12));
    assert!(dense > coarse);
    assert!(dense > 0.98);
}

#[rstest]
#[case(vec![])]
#[case(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])]
#[case(vec![Point::new(2.0, 2.0); 8])]
fn test_smoothness_without_measurable_turns_is_zero(#[case] path: Vec<Point>) {
    assert_eq!(smoothness(&path), 0.0);
}

#[test]
fn test_repeated_samples_are_skipped() {
    let mut path = synth::line(Point::new(0.0, 0.0), Point::new(90.0, 0.0), 10);
    path.insert(5, path[5]);
    assert!((smoothness(&path) - 1.0).abs() < 1e-9);
}

// --- COMPLETENESS ---

#[test]
fn test_closed_stroke_is_complete() {
    assert!((completeness(&synth::square(200.0, 20)) - 1.0).abs() < 1e-9);
}

#[test]
fn test_half_circle_is_incomplete() {
    let half: Vec<Point> = synth::circle(100.0, 60).into_iter().take(31).collect();
    assert!(completeness(&half) < 0.2);
}

#[test]
fn test_completeness_needs_ten_points() {
    let short = synth::circle(100.0, 60)[..9].to_vec();
    assert_eq!(completeness(&short), 0.0);
}

#[test]
fn test_completeness_of_a_collapsed_stroke_is_zero() {
    // Zero mean radius must not turn into full credit.
    assert_eq!(completeness(&vec![Point::new(3.0, 3.0); 12]), 0.0);
}

// --- CORNERS ---

#[test]
fn test_square_has_one_coarse_corner_per_vertex() {
    let path = synth::square(200.0, 20);
    let found = coarse_corners(&path);
    assert_eq!(found.len(), 4);
    for c in &found {
        assert!((c.sharpness.to_degrees() - 90.0).abs() < 1e-6);
    }
    let pts = corners::points(&found);
    for v in [(0.0, 0.0), (200.0, 0.0), (200.0, 200.0), (0.0, 200.0)] {
        assert!(pts.contains(&Point::new(v.0, v.1)), "missing vertex {:?}", v);
    }
}

#[test]
fn test_circle_has_no_coarse_corners() {
    assert!(coarse_corners(&synth::circle(150.0, 64)).is_empty());
}

#[test]
fn test_fine_corners_find_triangle_vertices_in_path_order() {
    let path = synth::equilateral_triangle(320.0, 10);
    let found = fine_corners(&path);
    assert_eq!(found.len(), 3);
    assert!(found.windows(2).all(|w| w[0].index < w[1].index));
    for c in &found {
        assert!((c.sharpness.to_degrees() - 120.0).abs() < 1e-6);
    }
}

#[test]
fn test_fine_corners_keep_the_three_sharpest() {
    // A square has four equally sharp corners; only three survive.
    let found = fine_corners(&synth::square(200.0, 20));
    assert_eq!(found.len(), corners::FINE_MAX_CORNERS);
    assert!(found.windows(2).all(|w| w[0].index < w[1].index));
}

#[test]
fn test_fine_corners_are_separated() {
    let found = fine_corners(&synth::pentagram(150.0, 8));
    for (i, a) in found.iter().enumerate() {
        for b in &found[i + 1..] {
            let d = shapescore::geometry::distance(a.point, b.point);
            assert!(d >= corners::FINE_MIN_SEPARATION, "corners {} apart", d);
        }
    }
}

#[test]
fn test_windowed_turn_is_none_near_the_ends() {
    let path = synth::square(200.0, 20);
    assert!(windowed_turn(&path, 1, 2).is_none());
    assert!(windowed_turn(&path, path.len() - 2, 2).is_none());
    assert!(windowed_turn(&path, 10, 2).is_some());
}

// --- CLOSED STROKES ---

#[test]
fn test_closed_ring_drops_the_repeated_start() {
    let path = synth::square(200.0, 20);
    assert_eq!(path.len(), 81);
    assert_eq!(closed_ring(&path), Some(80));
}

#[test]
fn test_small_gap_still_closes_the_ring() {
    let mut path = synth::polygon_from_vertex(&SQUARE_VERTICES, 20);
    path.pop();
    // Ends one step short of the start.
    assert_eq!(closed_ring(&path), Some(path.len()));
}

#[test]
fn test_open_stroke_has_no_ring() {
    let line = synth::line(Point::new(0.0, 0.0), Point::new(300.0, 0.0), 40);
    assert_eq!(closed_ring(&line), None);
    let arc = synth::circle(100.0, 40)[..20].to_vec();
    assert_eq!(closed_ring(&arc), None);
}

#[test]
fn test_cyclic_turn_sees_across_the_seam() {
    let path = synth::polygon_from_vertex(&SQUARE_VERTICES, 20);
    let ring = &path[..closed_ring(&path).unwrap()];
    let turn = cyclic_turn(ring, 0, corners::COARSE_WINDOW).unwrap();
    assert!((turn.to_degrees() - 90.0).abs() < 1e-6);
    assert!(windowed_turn(&path, 0, corners::COARSE_WINDOW).is_none());
}

#[test]
fn test_square_started_on_a_vertex_reports_it_once() {
    let path = synth::polygon_from_vertex(&SQUARE_VERTICES, 20);
    let found = coarse_corners(&path);
    assert_eq!(found.len(), 4);
    assert_eq!(found[0].index, 0);
    assert!(found.windows(2).all(|w| w[0].index < w[1].index));
    for v in SQUARE_VERTICES {
        let hits = found.iter().filter(|c| c.point == v).count();
        assert_eq!(hits, 1, "vertex {:?}", v);
    }
}

#[rstest]
#[case(10)]
#[case(20)]
#[case(40)]
fn test_triangle_started_on_a_vertex_has_three_fine_corners(#[case] per_edge: usize) {
    let vertices = [
        Point::new(0.0, 0.0),
        Point::new(320.0, 0.0),
        Point::new(160.0, 160.0 * 3f64.sqrt()),
    ];
    let found = fine_corners(&synth::polygon_from_vertex(&vertices, per_edge));
    assert_eq!(found.len(), 3);
    // Each corner sits within two samples of its vertex.
    let step = 320.0 / per_edge as f64;
    for v in vertices {
        let nearest = found
            .iter()
            .map(|c| shapescore::geometry::distance(c.point, v))
            .fold(f64::INFINITY, f64::min);
        assert!(nearest <= 2.0 * step + 1e-6, "{:?} is {} away", v, nearest);
    }
}

// --- EDGE RUNS ---

#[test]
fn test_edge_runs_wrap_through_the_start() {
    let path = synth::square(200.0, 20);
    let found = coarse_corners(&path);
    let runs = corners::edge_runs(&path, &found);
    assert_eq!(runs.len(), 4);
    let total: usize = runs.iter().map(Vec::len).sum();
    // Each corner is shared by two runs.
    assert_eq!(total, path.len() + found.len());
}

#[test]
fn test_line_fit_ignores_edge_direction() {
    let diagonal = synth::line(Point::new(0.0, 0.0), Point::new(120.0, 90.0), 12);
    assert!(shapescore::geometry::line_fit_deviation(&diagonal) < 1e-9);

    let band: Vec<Point> = (0..10)
        .flat_map(|i| {
            let x = i as f64 * 10.0;
            [Point::new(x, 2.0), Point::new(x, -2.0)]
        })
        .collect();
    let dev = shapescore::geometry::line_fit_deviation(&band);
    assert!((dev - 2.0).abs() < 1e-9, "got {}", dev);
}

// --- STAR PEAKS ---

#[test]
fn test_cyclic_peaks_find_a_tip_on_the_seam() {
    let radii = [10.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
    assert!(star::find_peaks(&radii).is_empty());
    assert_eq!(star::find_cyclic_peaks(&radii), vec![0]);
}

#[test]
fn test_star_symmetry_needs_all_five_peaks() {
    let center = Point::new(0.0, 0.0);
    let tips = synth::regular_vertices(5, 150.0, PI / 2.0);
    assert!(star::symmetry(&tips, center) > 0.999);
    assert_eq!(star::symmetry(&tips[..4], center), 0.0);
    assert_eq!(star::symmetry(&tips[..3], center), 0.0);
}
