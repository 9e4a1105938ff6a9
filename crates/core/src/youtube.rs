use std::sync::LazyLock;

use regex::Regex;

pub const URL_HINT: &str = "Please enter a valid YouTube URL";
pub const URL_PLACEHOLDER: &str = "https://www.youtube.com/watch?v=...";

static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://(www\.)?youtube\.com/watch\?v=.*|https?://youtu\.be/.*)$")
        .expect("static YouTube URL pattern is valid")
});

/// Whether `input` has the shape of a YouTube watch or short link.
///
/// This only drives an input hint. Submissions are never rejected on shape.
pub fn looks_like_youtube_url(input: &str) -> bool {
    YOUTUBE_URL.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_watch_and_short_links() {
        assert!(looks_like_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(looks_like_youtube_url("http://youtube.com/watch?v=abc"));
        assert!(looks_like_youtube_url("https://youtu.be/dQw4w9WgXcQ?t=30"));
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(!looks_like_youtube_url("https://vimeo.com/123456789"));
        assert!(!looks_like_youtube_url("https://www.youtube.com/playlist?list=PL1"));
        assert!(!looks_like_youtube_url("youtube.com/watch?v=abc"));
        assert!(!looks_like_youtube_url(""));
    }
}
