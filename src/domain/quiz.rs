//! Quiz attempts and the session that produces them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::video::{AnswerLetter, QuizQuestion};

/// One answered question inside an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Letter the user picked
    pub selected: AnswerLetter,

    /// Letter that was correct
    pub correct: AnswerLetter,

    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

/// Result of a finished quiz run, before the store stamps it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub score: u32,
    pub total_questions: u32,
    /// In `[0, 100]`
    pub percentage: f64,
    /// Keyed by question index
    #[serde(default)]
    pub answers: BTreeMap<usize, AnswerRecord>,
}

/// A stored quiz attempt.
///
/// `video_id` is a weak reference: the video may have been deleted since,
/// and deleting a video never removes its attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttemptRecord {
    pub video_id: String,

    #[serde(default)]
    pub score: u32,

    pub total_questions: u32,

    pub percentage: f64,

    #[serde(default)]
    pub answers: BTreeMap<usize, AnswerRecord>,

    pub completed_at: DateTime<Utc>,
}

impl QuizAttemptRecord {
    /// Stamp an attempt for a video with its completion time
    pub fn new(video_id: impl Into<String>, attempt: QuizAttempt, completed_at: DateTime<Utc>) -> Self {
        Self {
            video_id: video_id.into(),
            score: attempt.score,
            total_questions: attempt.total_questions,
            percentage: attempt.percentage,
            answers: attempt.answers,
            completed_at,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage)
    }
}

/// Feedback band for a quiz percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    /// 80% and above
    Excellent,
    /// 60% up to 80%
    Good,
    KeepPracticing,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Grade::Excellent
        } else if percentage >= 60.0 {
            Grade::Good
        } else {
            Grade::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent! You mastered this topic!",
            Grade::Good => "Good job! Review the missed questions.",
            Grade::KeepPracticing => "Keep practicing! Review all concepts.",
        }
    }
}

/// Walks a quiz one question at a time.
///
/// The attempt it produces keeps the scoring the web app has always
/// recorded: `score` counts correct answers given before the final
/// question, and `percentage` is `(score + 1) / total * 100`. Stored
/// history depends on this, so it is not corrected here.
///
/// `answers` is the exception. The web app saved its answer map without the
/// final question; this session records every question, final one included.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    questions: &'a [QuizQuestion],
    position: usize,
    score: u32,
    recorded_score: Option<u32>,
    answers: BTreeMap<usize, AnswerRecord>,
}

impl<'a> QuizSession<'a> {
    pub fn new(questions: &'a [QuizQuestion]) -> Self {
        Self {
            questions,
            position: 0,
            score: 0,
            recorded_score: None,
            answers: BTreeMap::new(),
        }
    }

    /// Question waiting for an answer, if any
    pub fn current_question(&self) -> Option<&'a QuizQuestion> {
        self.questions.get(self.position)
    }

    /// Zero-based index of the current question
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Running count of correct answers
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.questions.len()
    }

    /// Answer the current question and advance.
    ///
    /// Returns whether the answer was correct, or `None` once the quiz is
    /// already complete.
    pub fn answer(&mut self, selected: AnswerLetter) -> Option<bool> {
        let question = self.current_question()?;
        let is_correct = question.is_correct(selected);

        self.answers.insert(
            self.position,
            AnswerRecord {
                selected,
                correct: question.correct_answer,
                is_correct,
            },
        );

        if self.position + 1 == self.questions.len() {
            self.recorded_score = Some(self.score);
        }
        if is_correct {
            self.score += 1;
        }
        self.position += 1;

        Some(is_correct)
    }

    /// Produce the attempt once every question has been answered
    pub fn finish(self) -> Option<QuizAttempt> {
        if !self.is_complete() || self.questions.is_empty() {
            return None;
        }

        let score = self.recorded_score.unwrap_or(self.score);
        let total = self.questions.len() as u32;
        let percentage = f64::from(score + 1) / f64::from(total) * 100.0;

        Some(QuizAttempt {
            score,
            total_questions: total,
            percentage,
            answers: self.answers,
        })
    }
}
