//! Generator Integration Tests
//!
//! Tests for URL recognition, package shape and the simulated latency.

use std::time::{Duration, Instant};

use proptest::prelude::*;
use svlt::generator::pools::{DEFAULT_TRANSCRIPT, KEY_POINTS, QUIZZES, SUMMARIES};
use svlt::generator::{ContentGenerator, FixedSelector, GeneratorError, RandomSelector};
use svlt::{extract_video_id, validate_url, LearningStore, MemoryStorage, VideoRecord};

#[test]
fn test_known_url_shapes() {
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?v=jNQXAC9IVRw"),
        Some("jNQXAC9IVRw".to_string())
    );
    assert_eq!(
        extract_video_id("https://youtu.be/abc?x=1"),
        Some("abc".to_string())
    );
    assert_eq!(
        extract_video_id("https://www.youtube.com/embed/abc\nmore"),
        Some("abc".to_string())
    );
}

#[test]
fn test_not_a_url() {
    assert_eq!(extract_video_id("not a url"), None);
    assert!(!validate_url("not a url"));
    assert!(!validate_url(""));
}

proptest! {
    #[test]
    fn prop_extracts_id_up_to_first_delimiter(
        prefix in prop::sample::select(vec![
            "https://www.youtube.com/watch?v=",
            "https://youtu.be/",
            "https://www.youtube.com/embed/",
        ]),
        id in "[A-Za-z0-9_-]{1,16}",
        delimiter in prop::sample::select(vec!["", "&", "?", "#", "\n"]),
        tail in "[a-z0-9=]{0,8}",
    ) {
        let url = format!("{}{}{}{}", prefix, id, delimiter, tail);
        let expected = if delimiter.is_empty() {
            format!("{}{}", id, tail)
        } else {
            id.clone()
        };
        prop_assert_eq!(extract_video_id(&url), Some(expected));
    }

    #[test]
    fn prop_validate_matches_parse_and_extract(input in "\\PC{0,40}") {
        let expected = url::Url::parse(&input).is_ok() && extract_video_id(&input).is_some();
        prop_assert_eq!(validate_url(&input), expected);
    }
}

#[tokio::test]
async fn test_package_shape_from_random_pools() {
    let generator = ContentGenerator::with_selector(RandomSelector::seeded(7))
        .with_latency(Duration::ZERO);

    for _ in 0..20 {
        let package = generator
            .generate_package("https://youtu.be/xyz789")
            .await
            .unwrap();

        assert_eq!(package.video_id, "xyz789");
        assert_eq!(package.source_url, "https://youtu.be/xyz789");
        assert_eq!(package.transcript, DEFAULT_TRANSCRIPT);
        assert!(SUMMARIES.contains(&package.summary.as_str()));
        assert!(KEY_POINTS
            .iter()
            .any(|list| list.iter().copied().eq(package.key_points.iter().map(String::as_str))));

        assert_eq!(package.quiz.len(), 10);
        assert!(QUIZZES
            .iter()
            .any(|quiz| quiz[0].question == package.quiz[0].question));
        for question in &package.quiz {
            assert_eq!(question.options.len(), 4);
        }
    }
}

#[tokio::test]
async fn test_fixed_selector_picks_last_entries() {
    let generator = ContentGenerator::with_selector(FixedSelector(usize::MAX))
        .with_latency(Duration::ZERO);

    let package = generator
        .generate_package("https://www.youtube.com/watch?v=jNQXAC9IVRw")
        .await
        .unwrap();

    assert_eq!(package.summary, SUMMARIES[2]);
    assert_eq!(package.key_points[0], KEY_POINTS[2][0]);
    assert_eq!(package.quiz[0].question, QUIZZES[1][0].question);
    assert!(package.transcript.contains("machine learning"));
}

#[tokio::test]
async fn test_invalid_url_fails_after_latency() {
    let latency = Duration::from_millis(50);
    let generator = ContentGenerator::new().with_latency(latency);

    let started = Instant::now();
    let result = generator.generate_package("https://example.com/video").await;

    assert!(started.elapsed() >= latency);
    assert!(matches!(result, Err(GeneratorError::InvalidUrl { .. })));
}

#[tokio::test]
async fn test_generate_then_store_flow() {
    let url = "https://www.youtube.com/watch?v=jNQXAC9IVRw";
    assert!(validate_url(url));

    let generator = ContentGenerator::with_selector(FixedSelector(0)).with_latency(Duration::ZERO);
    let store = LearningStore::new(MemoryStorage::new());

    let package = generator.generate_package(url).await.unwrap();
    assert!(store.save_video(VideoRecord::from(package.clone())));

    let stored = store.get_video("jNQXAC9IVRw").unwrap();
    assert_eq!(stored.source_url, url);
    assert_eq!(stored.quiz, package.quiz);

    // Processing the same URL again merges into the same record
    let again = generator.generate_package(url).await.unwrap();
    store.save_video(VideoRecord::from(again));
    assert_eq!(store.get_all_videos().len(), 1);
}
