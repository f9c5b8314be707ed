//! Learning Store Integration Tests
//!
//! Tests for video upsert/delete, quiz history, stats and fault tolerance.

use std::collections::BTreeMap;

use svlt::library::{LearningStore, CURRENT_VIDEO_KEY, QUIZ_RESULTS_KEY, VIDEOS_KEY};
use svlt::storage::{FileStorage, KeyValueStore, MemoryStorage, StorageFault};
use svlt::{QuizAttempt, VideoRecord, VideoUpdate};
use tempfile::TempDir;

fn attempt(score: u32) -> QuizAttempt {
    QuizAttempt {
        score,
        total_questions: 10,
        percentage: f64::from(score + 1) * 10.0,
        answers: BTreeMap::new(),
    }
}

/// Substrate where every operation fails
struct BrokenStorage;

impl KeyValueStore for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageFault> {
        Err(StorageFault::Lock("storage unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageFault> {
        Err(StorageFault::Lock("storage unavailable".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageFault> {
        Err(StorageFault::Lock("storage unavailable".to_string()))
    }
}

#[test]
fn test_save_get_delete_scenario() {
    let store = LearningStore::new(MemoryStorage::new());

    assert!(store.save_video(VideoRecord::new("abc123")));

    let video = store.get_video("abc123").unwrap();
    assert_eq!(video.video_id, "abc123");
    assert!(video.created_at.is_some());
    assert!(video.updated_at.is_some());

    assert!(store.delete_video("abc123"));
    assert!(store.get_video("abc123").is_none());
    assert!(store.get_all_videos().iter().all(|v| v.video_id != "abc123"));
}

#[test]
fn test_new_id_grows_collection_existing_id_does_not() {
    let store = LearningStore::new(MemoryStorage::new());

    store.save_video(VideoRecord::new("a"));
    assert_eq!(store.get_all_videos().len(), 1);

    store.save_video(VideoRecord::new("b"));
    assert_eq!(store.get_all_videos().len(), 2);

    let before = store.get_video("a").unwrap();
    store.save_video(VideoRecord::new("a").with_summary("reprocessed"));
    let after = store.get_video("a").unwrap();

    assert_eq!(store.get_all_videos().len(), 2);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at >= before.updated_at);
    assert_eq!(after.summary, "reprocessed");
}

#[test]
fn test_videos_keep_insertion_order() {
    let store = LearningStore::new(MemoryStorage::new());
    for id in ["c", "a", "b"] {
        store.save_video(VideoRecord::new(id));
    }
    // Re-saving does not move a record
    store.save_video(VideoRecord::new("c"));

    let ids: Vec<String> = store
        .get_all_videos()
        .into_iter()
        .map(|v| v.video_id)
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn test_delete_leaves_quiz_results_dangling() {
    let store = LearningStore::new(MemoryStorage::new());
    store.save_video(VideoRecord::new("abc123"));
    store.save_quiz_result("abc123", attempt(5));

    store.delete_video("abc123");

    let results = store.get_video_quiz_results("abc123");
    assert_eq!(results.len(), 1);
    assert!(store.get_video(&results[0].video_id).is_none());
}

#[test]
fn test_delete_missing_video_is_ok() {
    let store = LearningStore::new(MemoryStorage::new());
    store.save_video(VideoRecord::new("keep"));

    assert!(store.delete_video("missing"));
    assert_eq!(store.get_all_videos().len(), 1);
}

#[test]
fn test_quiz_results_always_append() {
    let store = LearningStore::new(MemoryStorage::new());

    assert!(store.save_quiz_result("abc123", attempt(4)));
    assert!(store.save_quiz_result("abc123", attempt(4)));
    store.save_quiz_result("other", attempt(9));

    let all = store.get_quiz_results();
    assert_eq!(all.len(), 3);
    assert_eq!(store.get_video_quiz_results("abc123").len(), 2);
    assert_eq!(store.get_video_quiz_results("other").len(), 1);
    assert!(store.get_video_quiz_results("none").is_empty());
}

#[test]
fn test_current_video_last_write_wins() {
    let store = LearningStore::new(MemoryStorage::new());
    assert_eq!(store.get_current_video(), None);

    store.set_current_video("first");
    store.set_current_video("second");
    assert_eq!(store.get_current_video(), Some("second".to_string()));

    // Stored as the raw id, not JSON
    assert_eq!(
        store.storage().get(CURRENT_VIDEO_KEY).unwrap(),
        Some("second".to_string())
    );
}

#[test]
fn test_stats_track_collections() {
    let store = LearningStore::new(MemoryStorage::new());
    assert_eq!(store.get_stats().average_score, 0.0);

    store.save_video(VideoRecord::new("a"));
    store.save_video(VideoRecord::new("b"));
    store.save_video(VideoRecord::new("a"));
    store.save_quiz_result("a", attempt(3));
    store.save_quiz_result("a", attempt(4));

    let stats = store.get_stats();
    assert_eq!(stats.total_videos, store.get_all_videos().len());
    assert_eq!(stats.total_quizzes, store.get_quiz_results().len());
    assert_eq!(stats.average_score, 3.5);
}

#[test]
fn test_clear_all_empties_every_key() {
    let store = LearningStore::new(MemoryStorage::new());
    store.save_video(VideoRecord::new("a"));
    store.set_current_video("a");
    store.save_quiz_result("a", attempt(1));

    assert!(store.clear_all());

    assert!(store.get_all_videos().is_empty());
    assert!(store.get_quiz_results().is_empty());
    assert_eq!(store.get_current_video(), None);
    assert!(store.storage().is_empty());
}

#[test]
fn test_corrupt_collections_degrade_to_empty() {
    let storage = MemoryStorage::new();
    storage.set(VIDEOS_KEY, "not json").unwrap();
    storage.set(QUIZ_RESULTS_KEY, "[{\"broken\":").unwrap();
    let store = LearningStore::new(storage);

    assert!(store.get_all_videos().is_empty());
    assert!(store.get_quiz_results().is_empty());
    let stats = store.get_stats();
    assert_eq!(stats.total_videos, 0);
    assert_eq!(stats.total_quizzes, 0);
}

#[test]
fn test_broken_substrate_returns_defaults() {
    let store = LearningStore::new(BrokenStorage);

    assert!(!store.save_video(VideoRecord::new("a")));
    assert!(store.get_all_videos().is_empty());
    assert!(store.get_video("a").is_none());
    assert!(!store.delete_video("a"));
    assert!(!store.set_current_video("a"));
    assert_eq!(store.get_current_video(), None);
    assert!(!store.save_quiz_result("a", attempt(1)));
    assert!(store.get_quiz_results().is_empty());
    assert!(!store.clear_all());
    assert_eq!(store.get_stats().total_videos, 0);

    // The typed forms surface the fault
    assert!(matches!(
        store.try_get_all_videos(),
        Err(StorageFault::Lock(_))
    ));
}

#[test]
fn test_reads_data_written_by_the_web_app() {
    let storage = MemoryStorage::new();
    storage
        .set(
            VIDEOS_KEY,
            r#"[{"video_id":"jNQXAC9IVRw","youtube_url":"https://youtu.be/jNQXAC9IVRw","transcript":"t","summary":"s","key_points":["k1","k2"],"quiz":[{"question":"q","options":["a","b","c","d"],"correct_answer":"C"}],"createdAt":"2024-05-01T10:00:00.000Z","updatedAt":"2024-05-02T10:00:00.000Z"}]"#,
        )
        .unwrap();
    storage
        .set(
            QUIZ_RESULTS_KEY,
            r#"[{"videoId":"jNQXAC9IVRw","score":7,"totalQuestions":10,"percentage":80,"answers":{"0":{"selected":"A","correct":"A","isCorrect":true}},"completedAt":"2024-05-02T11:00:00.000Z"}]"#,
        )
        .unwrap();
    let store = LearningStore::new(storage);

    let video = store.get_video("jNQXAC9IVRw").unwrap();
    assert_eq!(video.key_points.len(), 2);
    assert_eq!(video.quiz[0].correct_option(), "c");

    let results = store.get_quiz_results();
    assert_eq!(results[0].score, 7);
    assert!(results[0].answers[&0].is_correct);
    assert_eq!(store.get_stats().average_score, 7.0);

    // Reprocessing keeps the original creation time
    store.save_video(VideoUpdate::new("jNQXAC9IVRw").with_summary("new"));
    let merged = store.get_video("jNQXAC9IVRw").unwrap();
    assert_eq!(merged.created_at, video.created_at);
    assert_eq!(merged.transcript, "t");
}

#[test]
fn test_file_backed_store_persists_across_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");

    {
        let store = LearningStore::new(FileStorage::new(&path));
        store.save_video(VideoRecord::new("abc123").with_summary("saved"));
        store.set_current_video("abc123");
        store.save_quiz_result("abc123", attempt(6));
    }

    let store = LearningStore::new(FileStorage::new(&path));
    assert_eq!(store.get_video("abc123").unwrap().summary, "saved");
    assert_eq!(store.get_current_video(), Some("abc123".to_string()));
    assert_eq!(store.get_quiz_results().len(), 1);

    assert!(store.clear_all());
    let reopened = LearningStore::new(FileStorage::new(&path));
    assert!(reopened.get_all_videos().is_empty());
}

#[test]
fn test_file_backed_store_recovers_from_corrupt_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");
    std::fs::write(&path, "garbage").unwrap();

    let store = LearningStore::new(FileStorage::new(&path));
    assert!(store.get_all_videos().is_empty());
    assert_eq!(store.get_stats().total_videos, 0);

    assert!(store.clear_all());
    assert!(store.save_video(VideoRecord::new("abc123")));
    assert!(store.get_video("abc123").is_some());

    // A corrupt file is replaced by the first write after it
    std::fs::write(&path, "garbage").unwrap();
    assert!(store.save_video(VideoRecord::new("def456")));
    let reopened = LearningStore::new(FileStorage::new(&path));
    assert_eq!(reopened.get_all_videos().len(), 1);
    assert!(reopened.get_video("def456").is_some());
}

#[test]
fn test_resave_overwrites_with_empty_fields() {
    let store = LearningStore::new(MemoryStorage::new());
    store.save_video(VideoUpdate::new("a").with_summary("old").with_key_points(vec![
        "k1".to_string(),
        "k2".to_string(),
    ]));

    store.save_video(VideoUpdate::new("a").with_summary("").with_key_points(Vec::new()));

    let video = store.get_video("a").unwrap();
    assert_eq!(video.summary, "");
    assert!(video.key_points.is_empty());
}

#[test]
fn test_resave_keeps_absent_fields_and_replaces_changed_ones() {
    let store = LearningStore::new(MemoryStorage::new());
    store.save_video(
        VideoUpdate::new("a")
            .with_transcript("transcript")
            .with_summary("old"),
    );

    store.save_video(VideoUpdate::new("a").with_summary("new"));

    let video = store.get_video("a").unwrap();
    assert_eq!(video.summary, "new");
    assert_eq!(video.transcript, "transcript");

    // A full record carries every field, so its empty transcript wins
    store.save_video(VideoRecord::new("a").with_summary("full"));
    let video = store.get_video("a").unwrap();
    assert_eq!(video.summary, "full");
    assert_eq!(video.transcript, "");
}
