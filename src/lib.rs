//! svlt - Smart video learning tool
//!
//! Turns a video URL into a learning package (transcript, summary, key
//! points, quiz) and keeps processed videos and quiz history in a local
//! key-value store.
//!
//! # Architecture
//!
//! Two leaf components compose into one flow:
//! - The generator maps a URL to a `LearningPackage` after a simulated delay
//! - The learning store persists videos and quiz attempts under three fixed
//!   keys of any `KeyValueStore`
//!
//! # Modules
//!
//! - `domain`: Data structures (VideoRecord, QuizAttemptRecord, QuizSession)
//! - `generator`: URL recognition and mock content generation
//! - `storage`: Key-value substrates (memory, JSON file)
//! - `library`: The learning store
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Process a video
//! svlt process "https://www.youtube.com/watch?v=jNQXAC9IVRw"
//!
//! # Take its quiz
//! svlt quiz jNQXAC9IVRw
//!
//! # Dashboard
//! svlt stats
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod generator;
pub mod library;
pub mod storage;

// Re-export main types at crate root for convenience
pub use domain::{
    AnswerLetter, Grade, LearningPackage, QuizAttempt, QuizAttemptRecord, QuizQuestion,
    QuizSession, StoreStats, VideoRecord, VideoUpdate,
};
pub use generator::{extract_video_id, validate_url, ContentGenerator, GeneratorError};
pub use library::LearningStore;
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageFault};
