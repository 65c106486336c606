use proptest::prelude::*;
use shapescore::geometry::Point;
use shapescore::scorer::circle;
use shapescore::scorer::ladder::ladder_for;
use shapescore::scorer::{Score, ShapeAnalysis};
use shapescore::{Scorer, Shape};
use std::f64::consts::PI;

// --- STRATEGIES ---

fn arb_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        Just(Shape::Circle),
        Just(Shape::Star),
        Just(Shape::Square),
        Just(Shape::Triangle),
    ]
}

prop_compose! {
    fn arb_point()(x in -1000.0..1000.0f64, y in -1000.0..1000.0f64) -> Point {
        Point::new(x, y)
    }
}

prop_compose! {
    fn arb_path()(points in proptest::collection::vec(arb_point(), 0..120)) -> Vec<Point> {
        points
    }
}

// Coordinates a broken input device might send.
fn arb_hostile_coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e6..1e6f64,
        Just(0.0),
        Just(1e300),
        Just(-1e300),
        Just(f64::MAX),
        Just(f64::MIN_POSITIVE),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

prop_compose! {
    fn arb_hostile_path()(
        coords in proptest::collection::vec((arb_hostile_coord(), arb_hostile_coord()), 0..60)
    ) -> Vec<Point> {
        coords.into_iter().map(Point::from).collect()
    }
}

prop_compose! {
    /// Points on a closed loop whose radius wobbles around 150.
    fn arb_wobbly_loop()(
        n in 16usize..200,
        wobble in proptest::collection::vec(-30.0..30.0f64, 200),
    ) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let t = i as f64 * 2.0 * PI / n as f64;
                let r = 150.0 + wobble[i];
                Point::new(r * t.cos(), r * t.sin())
            })
            .collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_score_stays_in_range(shape in arb_shape(), path in arb_path()) {
        let result = Scorer::default().score(shape, &path);
        prop_assert!(result.score <= Score::MAX);
        prop_assert!(result.details.accuracy <= 100);
        prop_assert!(result.details.smoothness <= 100);
        prop_assert!(result.details.completeness <= 100);
        prop_assert!(!result.feedback.is_empty());
    }

    #[test]
    fn prop_scoring_is_deterministic(shape in arb_shape(), path in arb_wobbly_loop()) {
        let scorer = Scorer::default();
        prop_assert_eq!(scorer.score(shape, &path), scorer.score(shape, &path));
    }

    #[test]
    fn prop_hostile_input_never_panics(shape in arb_shape(), path in arb_hostile_path()) {
        let result = Scorer::default().score(shape, &path);
        prop_assert!(result.score <= Score::MAX);
        let rendered = result.score.to_string();
        prop_assert!(rendered.contains('.'));
        prop_assert!(!rendered.contains("NaN"));
    }

    #[test]
    fn prop_score_never_exceeds_the_ceiling(shape in arb_shape(), path in arb_wobbly_loop()) {
        let scorer = Scorer::default();
        let result = scorer.score(shape, &path);
        let analysis = scorer.analyze(shape, &path).unwrap();
        let cap = ladder_for(shape).ceiling(shapescore::geometry::unit(analysis.gate));
        prop_assert!(result.score.as_f64() <= cap + 1e-3);
    }

    #[test]
    fn prop_pi_accuracy_falls_with_error(a in 1.0..6.0f64, b in 1.0..6.0f64) {
        let (near, far) = if (a - PI).abs() <= (b - PI).abs() { (a, b) } else { (b, a) };
        prop_assert!(circle::pi_accuracy(near) >= circle::pi_accuracy(far));
    }

    #[test]
    fn prop_circularity_is_monotone(
        c in 0.0..1.0f64, r in 0.0..1.0f64, p in 0.0..1.0f64, bump in 0.0..0.5f64
    ) {
        let base = circle::circularity(c, r, p);
        prop_assert!(circle::circularity((c + bump).min(1.0), r, p) >= base);
        prop_assert!(circle::circularity(c, (r + bump).min(1.0), p) >= base);
        prop_assert!(circle::circularity(c, r, (p + bump).min(1.0)) >= base);
    }

    #[test]
    fn prop_better_circularity_never_scores_lower(
        low in 0.0..1.0f64, gain in 0.0..1.0f64, smooth in 0.0..1.0f64, complete in 0.0..1.0f64
    ) {
        let high = (low + gain).min(1.0);
        let grade = |accuracy: f64| {
            Scorer::default().grade(Shape::Circle, &ShapeAnalysis {
                accuracy,
                gate: accuracy,
                smoothness: smooth,
                completeness: complete,
                features: vec![],
            })
        };
        prop_assert!(grade(high).score >= grade(low).score);
    }
}
