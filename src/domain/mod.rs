//! Domain types for svlt.
//!
//! This module contains the core data structures:
//! - Video: stored videos, learning packages, quiz questions
//! - Quiz: quiz attempts and the session that scores them
//! - Stats: dashboard aggregates

pub mod quiz;
pub mod stats;
pub mod video;

// Re-export commonly used types
pub use quiz::{AnswerRecord, Grade, QuizAttempt, QuizAttemptRecord, QuizSession};
pub use stats::StoreStats;
pub use video::{AnswerLetter, LearningPackage, QuizQuestion, VideoRecord, VideoUpdate};
