//! Persistence for processed videos and quiz history.
//!
//! `LearningStore` is generic over the key-value substrate so that the CLI
//! can run it on a JSON file while tests run it on an in-memory map.

pub mod store;

pub use store::{LearningStore, CURRENT_VIDEO_KEY, QUIZ_RESULTS_KEY, VIDEOS_KEY};
