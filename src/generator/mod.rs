//! Mock learning-content generator.
//!
//! Stands in for a real transcript fetch + language model: given a video
//! URL it waits a fixed simulated latency, then assembles a
//! [`LearningPackage`] from canned pools.
//!
//! - transcript: looked up by video id, generic fallback otherwise
//! - summary: one of 3, chosen by the selector
//! - key points: one of 3 lists, chosen by the selector
//! - quiz: one of 2 ten-question quizzes, chosen by the selector

pub mod pools;
pub mod selector;
pub mod video_url;

use std::time::Duration;

use thiserror::Error;

use crate::domain::LearningPackage;

pub use selector::{choose, FixedSelector, RandomSelector, Selector};
pub use video_url::{extract_video_id, validate_url};

/// Simulated processing delay
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

/// Errors from package generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("Invalid YouTube URL. Please provide a valid YouTube link: {url}")]
    InvalidUrl { url: String },
}

/// Builds learning packages from video URLs
#[derive(Debug)]
pub struct ContentGenerator<S = RandomSelector> {
    selector: S,
    latency: Duration,
}

impl Default for ContentGenerator<RandomSelector> {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentGenerator<RandomSelector> {
    /// Random selection with the default latency
    pub fn new() -> Self {
        Self::with_selector(RandomSelector::new())
    }

    /// Random selection with the configured latency
    pub fn from_config() -> anyhow::Result<Self> {
        let cfg = crate::config::config()?;
        Ok(Self::new().with_latency(cfg.generator.latency()))
    }
}

impl<S: Selector> ContentGenerator<S> {
    pub fn with_selector(selector: S) -> Self {
        Self {
            selector,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Generate a learning package for `url`.
    ///
    /// Always waits the full latency first, then either resolves or fails
    /// with [`GeneratorError::InvalidUrl`] when no video id can be found.
    pub async fn generate_package(&self, url: &str) -> Result<LearningPackage, GeneratorError> {
        tokio::time::sleep(self.latency).await;

        let video_id = extract_video_id(url).ok_or_else(|| GeneratorError::InvalidUrl {
            url: url.to_string(),
        })?;

        let transcript = pools::transcript_for(&video_id).to_string();
        let summary = choose(&self.selector, &pools::SUMMARIES).to_string();
        let key_points = choose(&self.selector, &pools::KEY_POINTS)
            .iter()
            .map(|point| point.to_string())
            .collect();
        let quiz = choose(&self.selector, &pools::QUIZZES)
            .iter()
            .map(pools::CannedQuestion::to_question)
            .collect();

        tracing::debug!("Generated learning package for {}", video_id);

        Ok(LearningPackage {
            video_id,
            source_url: url.to_string(),
            transcript,
            summary,
            key_points,
            quiz,
        })
    }
}
