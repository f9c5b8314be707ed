//! Video records and the learning packages they are built from.
//!
//! Field names on the wire follow the layout already present in users'
//! storage (`video_id`, `youtube_url`, `key_points`, `createdAt`, ...), so
//! renames here are load-bearing.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Positional answer letter, tied to the index of a question's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    /// All letters in option order
    pub const ALL: [AnswerLetter; 4] = [
        AnswerLetter::A,
        AnswerLetter::B,
        AnswerLetter::C,
        AnswerLetter::D,
    ];

    /// Index into `QuizQuestion::options` (A=0..D=3)
    pub fn index(self) -> usize {
        match self {
            AnswerLetter::A => 0,
            AnswerLetter::B => 1,
            AnswerLetter::C => 2,
            AnswerLetter::D => 3,
        }
    }

    /// Letter for an option index, if it is in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            AnswerLetter::A => "A",
            AnswerLetter::B => "B",
            AnswerLetter::C => "C",
            AnswerLetter::D => "D",
        };
        f.write_str(letter)
    }
}

impl FromStr for AnswerLetter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(AnswerLetter::A),
            "B" => Ok(AnswerLetter::B),
            "C" => Ok(AnswerLetter::C),
            "D" => Ok(AnswerLetter::D),
            _ => anyhow::bail!("Unknown answer letter: {} (expected A, B, C or D)", s),
        }
    }
}

/// A multiple-choice question with exactly four options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question prompt
    pub question: String,

    /// Options in A..D order
    pub options: [String; 4],

    /// Letter of the correct option
    pub correct_answer: AnswerLetter,
}

impl QuizQuestion {
    pub fn new(
        question: impl Into<String>,
        options: [&str; 4],
        correct_answer: AnswerLetter,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.map(String::from),
            correct_answer,
        }
    }

    /// Text of the correct option
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer.index()]
    }

    /// Whether `selected` is the correct letter
    pub fn is_correct(&self, selected: AnswerLetter) -> bool {
        selected == self.correct_answer
    }
}

/// Output of the content generator for a single video URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPackage {
    pub video_id: String,

    #[serde(rename = "youtube_url")]
    pub source_url: String,

    pub transcript: String,

    pub summary: String,

    pub key_points: Vec<String>,

    pub quiz: Vec<QuizQuestion>,
}

/// A stored video with its generated learning content.
///
/// `video_id` is the unique key inside the videos collection. Timestamps are
/// assigned by the store: a record built in memory has neither until it is
/// saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Identifier extracted from the source URL
    pub video_id: String,

    /// Original URL the content was generated from
    #[serde(rename = "youtube_url", default)]
    pub source_url: String,

    #[serde(default)]
    pub transcript: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub key_points: Vec<String>,

    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,

    /// When the record was first stored
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the record was last stored
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Fields written by other versions of the app, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VideoRecord {
    /// Create an otherwise empty record for a video id
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            source_url: String::new(),
            transcript: String::new(),
            summary: String::new(),
            key_points: Vec::new(),
            quiz: Vec::new(),
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }

    /// Set the source URL
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Attach an extra field that has no typed counterpart
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Shallow-merge `update` over this record.
    ///
    /// Every field `update` carries overwrites the stored one, even when it
    /// is empty; absent fields keep their stored value. Extra fields are
    /// merged key by key with `update` winning. `created_at` is never taken
    /// from `update`; `updated_at` is left to the caller.
    pub fn merge_from(&mut self, update: VideoUpdate) {
        if let Some(source_url) = update.source_url {
            self.source_url = source_url;
        }
        if let Some(transcript) = update.transcript {
            self.transcript = transcript;
        }
        if let Some(summary) = update.summary {
            self.summary = summary;
        }
        if let Some(key_points) = update.key_points {
            self.key_points = key_points;
        }
        if let Some(quiz) = update.quiz {
            self.quiz = quiz;
        }
        self.extra.extend(without_timestamps(update.extra));
    }
}

impl From<LearningPackage> for VideoRecord {
    fn from(package: LearningPackage) -> Self {
        Self {
            video_id: package.video_id,
            source_url: package.source_url,
            transcript: package.transcript,
            summary: package.summary,
            key_points: package.key_points,
            quiz: package.quiz,
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }
}

impl From<VideoUpdate> for VideoRecord {
    /// Absent fields become empty
    fn from(update: VideoUpdate) -> Self {
        Self {
            video_id: update.video_id,
            source_url: update.source_url.unwrap_or_default(),
            transcript: update.transcript.unwrap_or_default(),
            summary: update.summary.unwrap_or_default(),
            key_points: update.key_points.unwrap_or_default(),
            quiz: update.quiz.unwrap_or_default(),
            created_at: None,
            updated_at: None,
            extra: without_timestamps(update.extra),
        }
    }
}

/// Timestamps are owned by the store and never travel as extra fields
fn without_timestamps(extra: Map<String, Value>) -> Map<String, Value> {
    extra
        .into_iter()
        .filter(|(key, _)| key != "createdAt" && key != "updatedAt")
        .collect()
}

/// The fields a save carries for a video.
///
/// `None` means the field is absent and the stored value stays; `Some`
/// overwrites, including with an empty string or list. A full
/// `VideoRecord` or `LearningPackage` converts with every field present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoUpdate {
    pub video_id: String,

    #[serde(rename = "youtube_url", default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Vec<QuizQuestion>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VideoUpdate {
    /// An update for `video_id` with no fields present
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            ..Default::default()
        }
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn with_transcript(mut self, transcript: impl Into<String>) -> Self {
        self.transcript = Some(transcript.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_key_points(mut self, key_points: Vec<String>) -> Self {
        self.key_points = Some(key_points);
        self
    }

    pub fn with_quiz(mut self, quiz: Vec<QuizQuestion>) -> Self {
        self.quiz = Some(quiz);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl From<VideoRecord> for VideoUpdate {
    fn from(record: VideoRecord) -> Self {
        Self {
            video_id: record.video_id,
            source_url: Some(record.source_url),
            transcript: Some(record.transcript),
            summary: Some(record.summary),
            key_points: Some(record.key_points),
            quiz: Some(record.quiz),
            extra: record.extra,
        }
    }
}

impl From<LearningPackage> for VideoUpdate {
    fn from(package: LearningPackage) -> Self {
        VideoRecord::from(package).into()
    }
}
