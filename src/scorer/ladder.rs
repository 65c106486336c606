use crate::shapes::Shape;

/// Cap applied to the raw score while the gating feature sits below `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    pub threshold: f64,
    pub ceiling: f64,
}

const fn rung(threshold: f64, ceiling: f64) -> Rung {
    Rung { threshold, ceiling }
}

/// Ordered `(threshold, ceiling)` table, lowest threshold first.
#[derive(Debug, Clone, Copy)]
pub struct CeilingLadder {
    pub rungs: &'static [Rung],
}

impl CeilingLadder {
    /// Ceiling of the first rung the feature fails to clear; 100 if it clears all.
    ///
    /// A NaN feature clears nothing.
    pub fn ceiling(&self, feature: f64) -> f64 {
        self.rungs
            .iter()
            .find(|r| feature.is_nan() || feature < r.threshold)
            .map_or(100.0, |r| r.ceiling)
    }

    pub fn apply(&self, raw: f64, feature: f64) -> f64 {
        raw.min(self.ceiling(feature))
    }
}

static CIRCLE_LADDER: [Rung; 6] = [
    rung(0.05, 15.0),
    rung(0.1, 30.0),
    rung(0.2, 50.0),
    rung(0.4, 70.0),
    rung(0.6, 85.0),
    rung(0.8, 95.0),
];

static STAR_LADDER: [Rung; 4] = [
    rung(0.2, 20.0),
    rung(0.4, 40.0),
    rung(0.6, 65.0),
    rung(0.8, 85.0),
];

static SQUARE_LADDER: [Rung; 4] = [
    rung(0.3, 25.0),
    rung(0.5, 50.0),
    rung(0.7, 75.0),
    rung(0.85, 90.0),
];

static TRIANGLE_LADDER: [Rung; 4] = [
    rung(0.3, 30.0),
    rung(0.5, 50.0),
    rung(0.7, 75.0),
    rung(0.85, 90.0),
];

pub fn ladder_for(shape: Shape) -> CeilingLadder {
    let rungs: &'static [Rung] = match shape {
        Shape::Circle => &CIRCLE_LADDER,
        Shape::Star => &STAR_LADDER,
        Shape::Square => &SQUARE_LADDER,
        Shape::Triangle => &TRIANGLE_LADDER,
    };
    CeilingLadder { rungs }
}

// --- FEEDBACK TIERS (highest minimum first) ---

pub type FeedbackTier = (f64, &'static str);

static CIRCLE_FEEDBACK: [FeedbackTier; 6] = [
    (99.0, "A perfect circle!"),
    (95.0, "Excellent circle!"),
    (85.0, "Great circle! Aim for a little more precision."),
    (70.0, "Good circle. Try to keep the radius even."),
    (50.0, "Close to a circle, but it needs work."),
    (0.0, "Try again! Draw a rounder circle."),
];

static STAR_FEEDBACK: [FeedbackTier; 6] = [
    (95.0, "A perfect star!"),
    (85.0, "Excellent star!"),
    (75.0, "Good star! Make the points sharper."),
    (65.0, "Not bad. Make the five points more distinct."),
    (45.0, "Star-like, but it needs work."),
    (0.0, "Try again! Draw a star with five sharp points."),
];

static SQUARE_FEEDBACK: [FeedbackTier; 6] = [
    (95.0, "A perfect square!"),
    (85.0, "Excellent square!"),
    (75.0, "Good square! Draw the corners more precisely."),
    (65.0, "Not bad. Make all four angles right angles."),
    (45.0, "Square-like, but it needs work."),
    (0.0, "Try again! Draw a square with four right angles."),
];

static TRIANGLE_FEEDBACK: [FeedbackTier; 6] = [
    (95.0, "A perfect triangle!"),
    (85.0, "Excellent triangle!"),
    (75.0, "Good triangle! Draw the vertices more precisely."),
    (65.0, "Not bad. Join three straight sides more cleanly."),
    (45.0, "Triangle-like, but it needs work."),
    (0.0, "Try again! Draw a triangle with three equal sides."),
];

pub fn feedback_tiers(shape: Shape) -> &'static [FeedbackTier] {
    match shape {
        Shape::Circle => &CIRCLE_FEEDBACK,
        Shape::Star => &STAR_FEEDBACK,
        Shape::Square => &SQUARE_FEEDBACK,
        Shape::Triangle => &TRIANGLE_FEEDBACK,
    }
}

pub fn feedback_for(shape: Shape, score: f64) -> &'static str {
    let tiers = feedback_tiers(shape);
    tiers
        .iter()
        .find(|(min, _)| score >= *min)
        .or_else(|| tiers.last())
        .map_or("", |(_, msg)| msg)
}
