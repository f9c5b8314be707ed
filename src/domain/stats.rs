//! Aggregate statistics shown on the dashboard.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::quiz::QuizAttemptRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_videos: usize,
    pub total_quizzes: usize,
    /// Mean raw `score` across attempts (not percentage), to 2 places
    pub average_score: f64,
}

impl StoreStats {
    /// Compute stats from a video count and the full attempt history
    pub fn compute(total_videos: usize, attempts: &[QuizAttemptRecord]) -> Self {
        let average_score = if attempts.is_empty() {
            0.0
        } else {
            let sum: u64 = attempts.iter().map(|a| u64::from(a.score)).sum();
            round2(sum as f64 / attempts.len() as f64)
        };

        Self {
            total_videos,
            total_quizzes: attempts.len(),
            average_score,
        }
    }
}

impl fmt::Display for StoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} videos, {} quizzes, average score {:.2}",
            self.total_videos, self.total_quizzes, self.average_score
        )
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
