use crate::config::ScoringWeights;
use crate::geometry::Point;
use crate::ranking::{Leaderboard, RankingEntry, RankingPeriod, Submission, SubmitOutcome};
use crate::scorer::{Score, Scorer, ScoringResult};
use crate::shapes::Shape;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, RwLock};
use tracing::{info, warn};

/// Default length of the public top list.
pub const TOP_LIMIT: usize = 10;

/// Shared state behind the shapescore services.
#[derive(Default)]
pub struct ShapeScoreState {
    pub scorer: RwLock<Scorer>,
    pub leaderboard: Mutex<Leaderboard>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub shape: String,
    pub points: Vec<Point>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub user_id: String,
    pub shape: String,
    pub score: Score,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub period: RankingPeriod,
    #[serde(flatten)]
    pub outcome: SubmitOutcome,
    pub rank: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub shape: Shape,
    pub period: RankingPeriod,
    pub top: Vec<RankingEntry>,
    pub user_rank: Option<usize>,
    pub user_best: Option<Score>,
}

fn parse_shape(shape_id: &str) -> Result<Shape, String> {
    shape_id
        .parse::<Shape>()
        .map_err(|_| format!("Unknown shape '{}'", shape_id))
}

/// Service: Score one stroke with the current weights.
pub fn score_stroke(
    state: &ShapeScoreState,
    shape_id: &str,
    points: &[Point],
) -> Result<ScoringResult, String> {
    let shape = parse_shape(shape_id)?;
    let scorer = state.scorer.read().map_err(|e| e.to_string())?;
    Ok(scorer.score(shape, points))
}

pub fn score_request(
    state: &ShapeScoreState,
    request: &ScoreRequest,
) -> Result<ScoringResult, String> {
    score_stroke(state, &request.shape, &request.points)
}

/// Service: Replace the blend weights. Invalid weights leave the old ones in place.
pub fn update_weights(state: &ShapeScoreState, weights: ScoringWeights) -> Result<(), String> {
    if let Err(e) = weights.validate() {
        warn!("Rejected weights update: {}", e);
        return Err(e.to_string());
    }
    let mut scorer = state.scorer.write().map_err(|e| e.to_string())?;
    scorer.weights = weights;
    info!("Scoring weights updated");
    Ok(())
}

/// Service: Record a score for the current month.
pub fn submit_score(
    state: &ShapeScoreState,
    request: SubmitRequest,
) -> Result<SubmitResponse, String> {
    submit_score_for(state, request, RankingPeriod::current())
}

pub fn submit_score_for(
    state: &ShapeScoreState,
    request: SubmitRequest,
    period: RankingPeriod,
) -> Result<SubmitResponse, String> {
    let shape = parse_shape(&request.shape)?;
    let submission = Submission::new(&request.user_id, shape, request.score.as_f64())
        .map_err(|e| e.to_string())?;
    let user_id = submission.user_id.clone();

    let mut board = state.leaderboard.lock().map_err(|e| e.to_string())?;
    let outcome = board.submit(submission, period);
    let rank = board.rank_of(&user_id, shape, period);

    Ok(SubmitResponse {
        period,
        outcome,
        rank,
    })
}

/// Service: Top list for a shape and month, plus the caller's standing.
pub fn ranking(
    state: &ShapeScoreState,
    shape_id: &str,
    period: RankingPeriod,
    user_id: Option<&str>,
) -> Result<RankingResponse, String> {
    let shape = parse_shape(shape_id)?;
    let board = state.leaderboard.lock().map_err(|e| e.to_string())?;

    let (user_rank, user_best) = match user_id {
        Some(id) => (
            board.rank_of(id, shape, period),
            board.best(id, shape, period).map(|b| b.score),
        ),
        None => (None, None),
    };

    Ok(RankingResponse {
        shape,
        period,
        top: board.top(shape, period, TOP_LIMIT),
        user_rank,
        user_best,
    })
}

/// Service: Last month's winner for every shape that had entries.
pub fn hall_of_fame(
    state: &ShapeScoreState,
    period: RankingPeriod,
) -> Result<Vec<(Shape, RankingEntry)>, String> {
    use strum::IntoEnumIterator;

    let board = state.leaderboard.lock().map_err(|e| e.to_string())?;
    let previous = period.previous();
    Ok(Shape::iter()
        .filter_map(|shape| board.champion(shape, previous).map(|e| (shape, e)))
        .collect())
}
