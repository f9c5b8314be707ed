//! Video URL recognition.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Matches `youtube.com/watch?v=`, `youtu.be/` and `youtube.com/embed/`,
/// capturing the id up to the first `&`, newline, `?` or `#`.
const VIDEO_ID_PATTERN: &str =
    r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)";

fn video_id_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VIDEO_ID_PATTERN).ok()).as_ref()
}

/// Extract the video id from a watch, short-link or embed URL
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id_regex()?
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// True if `url` parses as a URL and carries a recognizable video id
pub fn validate_url(url: &str) -> bool {
    ::url::Url::parse(url).is_ok() && extract_video_id(url).is_some()
}
