//! Persistent store for videos and quiz attempts.
//!
//! Three fixed keys in the substrate:
//!
//! | Key                  | Content                              |
//! |----------------------|--------------------------------------|
//! | `svlt_videos`        | JSON array of `VideoRecord`          |
//! | `svlt_current_video` | raw video id                         |
//! | `svlt_quiz_results`  | JSON array of `QuizAttemptRecord`    |
//!
//! Each operation comes in two forms. `try_*` returns the `StorageFault`;
//! the plain form logs it and hands back a safe default, so dashboard code
//! never has to deal with a broken store.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{QuizAttempt, QuizAttemptRecord, StoreStats, VideoRecord, VideoUpdate};
use crate::storage::{KeyValueStore, StorageFault};

pub const VIDEOS_KEY: &str = "svlt_videos";
pub const CURRENT_VIDEO_KEY: &str = "svlt_current_video";
pub const QUIZ_RESULTS_KEY: &str = "svlt_quiz_results";

/// Store of learning content over any key-value substrate
#[derive(Debug)]
pub struct LearningStore<S> {
    storage: S,
}

impl<S: KeyValueStore> LearningStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Underlying substrate
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    // ------------------------------------------------------------------
    // Videos
    // ------------------------------------------------------------------

    /// Insert a video, or merge it into the stored record with the same id.
    ///
    /// New records get `createdAt = updatedAt = now`. Existing records take
    /// every field the update carries, keep their `createdAt` and have
    /// `updatedAt` refreshed.
    pub fn try_save_video(&self, video: impl Into<VideoUpdate>) -> Result<(), StorageFault> {
        let update = video.into();
        let mut videos = self.try_get_all_videos()?;
        let now = Utc::now();

        if let Some(existing) = videos.iter_mut().find(|v| v.video_id == update.video_id) {
            existing.merge_from(update);
            existing.updated_at = Some(now);
            tracing::debug!("Updated video {}", existing.video_id);
        } else {
            let mut record = VideoRecord::from(update);
            record.created_at = Some(now);
            record.updated_at = Some(now);
            tracing::info!("Stored new video {}", record.video_id);
            videos.push(record);
        }

        self.write_collection(VIDEOS_KEY, &videos)
    }

    pub fn save_video(&self, video: impl Into<VideoUpdate>) -> bool {
        absorb("saving video", self.try_save_video(video).map(|_| true), false)
    }

    /// All videos in insertion order
    pub fn try_get_all_videos(&self) -> Result<Vec<VideoRecord>, StorageFault> {
        self.read_collection(VIDEOS_KEY)
    }

    pub fn get_all_videos(&self) -> Vec<VideoRecord> {
        absorb("getting videos", self.try_get_all_videos(), Vec::new())
    }

    pub fn try_get_video(&self, video_id: &str) -> Result<Option<VideoRecord>, StorageFault> {
        Ok(self
            .try_get_all_videos()?
            .into_iter()
            .find(|v| v.video_id == video_id))
    }

    pub fn get_video(&self, video_id: &str) -> Option<VideoRecord> {
        absorb("getting video", self.try_get_video(video_id), None)
    }

    /// Remove every record with `video_id`.
    ///
    /// Quiz attempts referencing the video are left in place.
    pub fn try_delete_video(&self, video_id: &str) -> Result<(), StorageFault> {
        let videos = self.try_get_all_videos()?;
        let before = videos.len();
        let remaining: Vec<VideoRecord> = videos
            .into_iter()
            .filter(|v| v.video_id != video_id)
            .collect();

        if remaining.len() < before {
            tracing::info!("Deleted video {}", video_id);
        }
        self.write_collection(VIDEOS_KEY, &remaining)
    }

    pub fn delete_video(&self, video_id: &str) -> bool {
        absorb("deleting video", self.try_delete_video(video_id).map(|_| true), false)
    }

    // ------------------------------------------------------------------
    // Current video pointer
    // ------------------------------------------------------------------

    pub fn try_set_current_video(&self, video_id: &str) -> Result<(), StorageFault> {
        self.storage.set(CURRENT_VIDEO_KEY, video_id)
    }

    pub fn set_current_video(&self, video_id: &str) -> bool {
        absorb(
            "setting current video",
            self.try_set_current_video(video_id).map(|_| true),
            false,
        )
    }

    /// Current video id; an empty stored value reads as `None`
    pub fn try_get_current_video(&self) -> Result<Option<String>, StorageFault> {
        Ok(self
            .storage
            .get(CURRENT_VIDEO_KEY)?
            .filter(|id| !id.is_empty()))
    }

    pub fn get_current_video(&self) -> Option<String> {
        absorb("getting current video", self.try_get_current_video(), None)
    }

    // ------------------------------------------------------------------
    // Quiz results
    // ------------------------------------------------------------------

    /// Append a quiz attempt stamped with `completedAt = now`.
    ///
    /// Attempts are never merged: every completion is a new entry.
    pub fn try_save_quiz_result(
        &self,
        video_id: &str,
        attempt: QuizAttempt,
    ) -> Result<(), StorageFault> {
        let mut results = self.try_get_quiz_results()?;
        results.push(QuizAttemptRecord::new(video_id, attempt, Utc::now()));
        tracing::info!("Recorded quiz attempt for {}", video_id);
        self.write_collection(QUIZ_RESULTS_KEY, &results)
    }

    pub fn save_quiz_result(&self, video_id: &str, attempt: QuizAttempt) -> bool {
        absorb(
            "saving quiz result",
            self.try_save_quiz_result(video_id, attempt).map(|_| true),
            false,
        )
    }

    pub fn try_get_quiz_results(&self) -> Result<Vec<QuizAttemptRecord>, StorageFault> {
        self.read_collection(QUIZ_RESULTS_KEY)
    }

    pub fn get_quiz_results(&self) -> Vec<QuizAttemptRecord> {
        absorb("getting quiz results", self.try_get_quiz_results(), Vec::new())
    }

    pub fn try_get_video_quiz_results(
        &self,
        video_id: &str,
    ) -> Result<Vec<QuizAttemptRecord>, StorageFault> {
        Ok(self
            .try_get_quiz_results()?
            .into_iter()
            .filter(|r| r.video_id == video_id)
            .collect())
    }

    pub fn get_video_quiz_results(&self, video_id: &str) -> Vec<QuizAttemptRecord> {
        absorb(
            "getting video quiz results",
            self.try_get_video_quiz_results(video_id),
            Vec::new(),
        )
    }

    // ------------------------------------------------------------------
    // Bulk operations
    // ------------------------------------------------------------------

    /// Remove all three keys
    pub fn try_clear_all(&self) -> Result<(), StorageFault> {
        self.storage.remove(VIDEOS_KEY)?;
        self.storage.remove(CURRENT_VIDEO_KEY)?;
        self.storage.remove(QUIZ_RESULTS_KEY)?;
        tracing::info!("Cleared all stored data");
        Ok(())
    }

    pub fn clear_all(&self) -> bool {
        absorb("clearing storage", self.try_clear_all().map(|_| true), false)
    }

    pub fn try_get_stats(&self) -> Result<StoreStats, StorageFault> {
        let videos = self.try_get_all_videos()?;
        let results = self.try_get_quiz_results()?;
        Ok(StoreStats::compute(videos.len(), &results))
    }

    pub fn get_stats(&self) -> StoreStats {
        absorb("getting stats", self.try_get_stats(), StoreStats::default())
    }

    // ------------------------------------------------------------------
    // Serialization helpers
    // ------------------------------------------------------------------

    /// Read a JSON collection.
    ///
    /// An absent value or one that is not a JSON array reads as empty.
    /// Entries that fail to decode are skipped one by one, so a single bad
    /// entry does not hide the rest of the collection.
    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StorageFault> {
        let Some(raw) = self.storage.get(key)? else {
            return Ok(Vec::new());
        };

        let entries: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring corrupt {} collection: {}", key, e);
                return Ok(Vec::new());
            }
        };

        Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!("Skipping entry {} of {}: {}", index, key, e);
                    None
                }
            })
            .collect())
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StorageFault> {
        let json = serde_json::to_string(items)?;
        tracing::debug!("Writing {} ({} items, {} bytes)", key, items.len(), json.len());
        self.storage.set(key, &json)
    }
}

/// Log a storage fault and fall back to `default`
fn absorb<T>(action: &str, result: Result<T, StorageFault>, default: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Error {}: {}", action, e);
            default
        }
    }
}
