use shapescore::api::{
    hall_of_fame, ranking, score_request, score_stroke, submit_score_for, update_weights,
    ScoreRequest, ShapeScoreState, SubmitRequest, TOP_LIMIT,
};
use shapescore::config::ScoringWeights;
use shapescore::ranking::RankingPeriod;
use shapescore::{synth, Score, Shape};

fn march() -> RankingPeriod {
    RankingPeriod::new(2026, 3).unwrap()
}

fn submit(state: &ShapeScoreState, user: &str, shape: &str, value: f64) {
    submit_score_for(
        state,
        SubmitRequest {
            user_id: user.to_string(),
            shape: shape.to_string(),
            score: Score::from_percentage(value),
        },
        march(),
    )
    .unwrap();
}

#[test]
fn test_score_stroke_accepts_shape_aliases() {
    let state = ShapeScoreState::default();
    let star = synth::ideal(Shape::Star);

    let a = score_stroke(&state, "star5", &star).unwrap();
    let b = score_stroke(&state, "STAR", &star).unwrap();
    assert_eq!(a, b);
    assert!(a.score.as_f64() >= 90.0);
}

#[test]
fn test_score_stroke_unknown_shape() {
    let state = ShapeScoreState::default();
    let err = score_stroke(&state, "hexagon", &synth::ideal(Shape::Circle)).unwrap_err();
    assert!(err.contains("hexagon"));
}

#[test]
fn test_score_request_from_json() {
    let state = ShapeScoreState::default();
    let points = synth::ideal(Shape::Square);
    let body = serde_json::json!({ "shape": "square", "points": points });
    let request: ScoreRequest = serde_json::from_value(body).unwrap();

    let result = score_request(&state, &request).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    // Scores travel as fixed three-decimal strings.
    assert!(json["score"].as_str().unwrap().contains('.'));
    assert_eq!(json["details"]["completeness"], 100);
}

#[test]
fn test_update_weights_rejects_invalid_and_keeps_old() {
    let state = ShapeScoreState::default();
    let bad = ScoringWeights {
        square_accuracy: -1.0,
        ..Default::default()
    };
    assert!(update_weights(&state, bad).is_err());
    assert_eq!(state.scorer.read().unwrap().weights, ScoringWeights::default());

    let good = ScoringWeights {
        circle_accuracy: 1.0,
        circle_smoothness: 0.0,
        circle_completeness: 0.0,
        ..Default::default()
    };
    update_weights(&state, good.clone()).unwrap();
    assert_eq!(state.scorer.read().unwrap().weights, good);
}

#[test]
fn test_submit_reports_records_and_rank() {
    let state = ShapeScoreState::default();
    submit(&state, "bo", "circle", 90.0);

    let first = submit_score_for(
        &state,
        SubmitRequest {
            user_id: "ana".into(),
            shape: "circle".into(),
            score: Score::from_percentage(85.0),
        },
        march(),
    )
    .unwrap();
    assert!(first.outcome.is_new_record);
    assert_eq!(first.rank, Some(2));

    let worse = submit_score_for(
        &state,
        SubmitRequest {
            user_id: "ana".into(),
            shape: "circle".into(),
            score: Score::from_percentage(40.0),
        },
        march(),
    )
    .unwrap();
    assert!(!worse.outcome.is_new_record);
    assert_eq!(worse.outcome.best, Score::from_percentage(85.0));

    let json = serde_json::to_value(&worse).unwrap();
    assert_eq!(json["isNewRecord"], false);
    assert_eq!(json["previousBest"], "85.000");
    assert_eq!(json["period"]["month"], 3);
}

#[test]
fn test_submit_request_validates_score_on_the_wire() {
    let ok: SubmitRequest =
        serde_json::from_str(r#"{"userId": "ana", "shape": "star5", "score": "87.500"}"#).unwrap();
    assert_eq!(ok.score, Score::from_percentage(87.5));

    let numeric: SubmitRequest =
        serde_json::from_str(r#"{"userId": "ana", "shape": "star5", "score": 12.25}"#).unwrap();
    assert_eq!(numeric.score.thousandths(), 12_250);

    let too_high =
        serde_json::from_str::<SubmitRequest>(r#"{"userId": "a", "shape": "star5", "score": 101}"#);
    assert!(too_high.is_err());
}

#[test]
fn test_submit_rejects_blank_user() {
    let state = ShapeScoreState::default();
    let err = submit_score_for(
        &state,
        SubmitRequest {
            user_id: " ".into(),
            shape: "circle".into(),
            score: Score::from_percentage(50.0),
        },
        march(),
    )
    .unwrap_err();
    assert!(err.contains("user id"));
}

#[test]
fn test_ranking_lists_top_and_caller() {
    let state = ShapeScoreState::default();
    for i in 0..15 {
        submit(&state, &format!("user{:02}", i), "triangle", 50.0 + i as f64);
    }

    let response = ranking(&state, "triangle", march(), Some("user03")).unwrap();
    assert_eq!(response.top.len(), TOP_LIMIT);
    assert_eq!(response.top[0].user_id, "user14");
    assert_eq!(response.user_rank, Some(12));
    assert_eq!(response.user_best, Some(Score::from_percentage(53.0)));

    let anonymous = ranking(&state, "triangle", march(), None).unwrap();
    assert_eq!(anonymous.user_rank, None);
}

#[test]
fn test_hall_of_fame_reads_the_previous_month() {
    let state = ShapeScoreState::default();
    submit(&state, "ana", "square", 91.0);
    submit(&state, "bo", "square", 97.0);
    submit(&state, "ana", "circle", 60.0);

    let april = RankingPeriod::new(2026, 4).unwrap();
    let champions = hall_of_fame(&state, april).unwrap();
    assert_eq!(champions.len(), 2);
    assert!(champions
        .iter()
        .any(|(shape, e)| *shape == Shape::Square && e.user_id == "bo"));

    assert!(hall_of_fame(&state, march()).unwrap().is_empty());
}
