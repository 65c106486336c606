//! In-memory best-score board, one high-water mark per user, shape and month.

use crate::error::{ShapeScoreError, SsResult};
use crate::scorer::Score;
use crate::shapes::Shape;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::info;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RankingPeriod {
    pub year: i32,
    pub month: u32,
}

impl RankingPeriod {
    pub fn new(year: i32, month: u32) -> SsResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ShapeScoreError::Validation(format!(
                "month must be 1-12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::containing(Utc::now().date_naive())
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl fmt::Display for RankingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub user_id: String,
    pub shape: Shape,
    pub score: Score,
}

impl Submission {
    /// Builds a submission from a raw percentage, refusing out-of-range values.
    pub fn new(user_id: &str, shape: Shape, value: f64) -> SsResult<Self> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(ShapeScoreError::Validation("user id is required".into()));
        }
        let score = Score::try_from_percentage(value).ok_or_else(|| {
            ShapeScoreError::Validation(format!(
                "score must be between 0.000 and 100.000, got {}",
                value
            ))
        })?;
        Ok(Self {
            user_id: user_id.to_string(),
            shape,
            score,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestScore {
    pub score: Score,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub is_new_record: bool,
    pub previous_best: Option<Score>,
    /// Stored best after the submission.
    pub best: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub rank: usize,
    pub user_id: String,
    pub score: Score,
    pub updated_at: DateTime<Utc>,
}

type BoardKey = (String, Shape, RankingPeriod);

#[derive(Debug, Default)]
pub struct Leaderboard {
    best: HashMap<BoardKey, BestScore>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the score only when it beats the user's best for the period.
    pub fn submit(&mut self, submission: Submission, period: RankingPeriod) -> SubmitOutcome {
        self.submit_at(submission, period, Utc::now())
    }

    pub fn submit_at(
        &mut self,
        submission: Submission,
        period: RankingPeriod,
        at: DateTime<Utc>,
    ) -> SubmitOutcome {
        let key = (submission.user_id, submission.shape, period);
        let previous_best = self.best.get(&key).map(|b| b.score);

        let is_new_record = previous_best.is_none_or(|prev| submission.score > prev);
        if is_new_record {
            info!(
                "New best for {} on {} ({}): {}",
                key.0, key.1, period, submission.score
            );
            self.best.insert(
                key,
                BestScore {
                    score: submission.score,
                    updated_at: at,
                },
            );
        }

        SubmitOutcome {
            is_new_record,
            previous_best,
            best: previous_best
                .filter(|_| !is_new_record)
                .unwrap_or(submission.score),
        }
    }

    pub fn best(&self, user_id: &str, shape: Shape, period: RankingPeriod) -> Option<BestScore> {
        self.best
            .get(&(user_id.to_string(), shape, period))
            .copied()
    }

    fn entries(&self, shape: Shape, period: RankingPeriod) -> Vec<(&str, BestScore)> {
        let mut rows: Vec<(&str, BestScore)> = self
            .best
            .iter()
            .filter(|((_, s, p), _)| *s == shape && *p == period)
            .map(|((user, _, _), b)| (user.as_str(), *b))
            .collect();
        // Highest first; ties go to whoever got there first.
        rows.sort_by(|a, b| {
            b.1.score
                .cmp(&a.1.score)
                .then(a.1.updated_at.cmp(&b.1.updated_at))
                .then(a.0.cmp(b.0))
        });
        rows
    }

    /// Best `limit` users for the shape and period.
    pub fn top(&self, shape: Shape, period: RankingPeriod, limit: usize) -> Vec<RankingEntry> {
        self.entries(shape, period)
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, (user, b))| RankingEntry {
                rank: i + 1,
                user_id: user.to_string(),
                score: b.score,
                updated_at: b.updated_at,
            })
            .collect()
    }

    /// One plus the number of users with a strictly higher best.
    pub fn rank_of(&self, user_id: &str, shape: Shape, period: RankingPeriod) -> Option<usize> {
        let mine = self.best(user_id, shape, period)?.score;
        let higher = self
            .best
            .iter()
            .filter(|((_, s, p), b)| *s == shape && *p == period && b.score > mine)
            .count();
        Some(higher + 1)
    }

    /// The period's top entry, for the hall of fame.
    pub fn champion(&self, shape: Shape, period: RankingPeriod) -> Option<RankingEntry> {
        self.top(shape, period, 1).into_iter().next()
    }
}
