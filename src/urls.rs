// URL validation and identifier extraction
//
// Validation is a loose host-shape check; extraction is the strict part. The
// two stay decoupled: a URL can pass validation and still yield no identifier.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::VideoRef;

lazy_static! {
    static ref HOST_RE: Regex =
        Regex::new(r"(?i)^(https?://)?(www\.)?(youtube\.com|youtu\.?be)/.+$").unwrap();
    // Greedy prefix: the last marker occurrence wins
    static ref STANDARD_RE: Regex =
        Regex::new(r"^.*(youtu\.be/|/v/|/u/\w/|/embed/|watch\?v=|&v=)([^#&?]*)").unwrap();
    static ref SHORTS_RE: Regex = Regex::new(r"^.*(/shorts/)([^#&?]*)").unwrap();
}

/// Check whether the input is a structurally plausible YouTube URL
pub fn is_valid_url(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return false;
    }
    HOST_RE.is_match(raw)
}

/// Parse a submitted URL into a canonical video reference.
///
/// Standard forms (watch, embed, short-link) require an identifier run of
/// exactly 11 characters before any trailing `#`, `&`, or `?`. The Shorts
/// marker accepts any non-empty run and is matched host-independently, so a
/// string whose scheme and host were stripped upstream still extracts.
pub fn extract_video_ref(raw: &str) -> Option<VideoRef> {
    if let Some(caps) = STANDARD_RE.captures(raw) {
        let id = &caps[2];
        if id.len() == 11 {
            return Some(VideoRef {
                id: id.to_string(),
                is_short_form: false,
            });
        }
    }

    if let Some(caps) = SHORTS_RE.captures(raw) {
        let id = &caps[2];
        if !id.is_empty() {
            return Some(VideoRef {
                id: id.to_string(),
                is_short_form: true,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("   "));
    }

    #[test]
    fn accepts_watch_url() {
        assert!(is_valid_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
    }

    #[test]
    fn accepts_scheme_and_host_case_insensitively() {
        assert!(is_valid_url("HTTPS://WWW.YOUTUBE.COM/watch?v=dQw4w9WgXcQ"));
        assert!(is_valid_url("youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn rejects_other_hosts() {
        assert!(!is_valid_url("https://example.com/not-a-video"));
        assert!(!is_valid_url("not a url at all"));
    }

    #[test]
    fn extracts_short_link() {
        let video = extract_video_ref("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(video.id, "dQw4w9WgXcQ");
        assert!(!video.is_short_form);
    }

    #[test]
    fn extracts_watch_url_ignoring_trailing_params() {
        let video =
            extract_video_ref("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=30").unwrap();
        assert_eq!(video.id, "dQw4w9WgXcQ");
        assert!(!video.is_short_form);
    }

    #[test]
    fn extracts_watch_url_ignoring_fragment() {
        let video =
            extract_video_ref("https://www.youtube.com/watch?v=dQw4w9WgXcQ#t=30").unwrap();
        assert_eq!(video.id, "dQw4w9WgXcQ");
    }

    #[test]
    fn extracts_embed_url() {
        let video = extract_video_ref("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap();
        assert_eq!(video.id, "dQw4w9WgXcQ");
        assert!(!video.is_short_form);
    }

    #[test]
    fn last_id_parameter_wins() {
        let video =
            extract_video_ref("https://www.youtube.com/watch?v=aaaaaaaaaaa&v=dQw4w9WgXcQ")
                .unwrap();
        assert_eq!(video.id, "dQw4w9WgXcQ");
    }

    #[test]
    fn extracts_shorts_url_stripping_query() {
        let video =
            extract_video_ref("https://www.youtube.com/shorts/abc123?feature=share").unwrap();
        assert_eq!(video.id, "abc123");
        assert!(video.is_short_form);
    }

    #[test]
    fn extracts_shorts_without_scheme_or_host() {
        let video = extract_video_ref("/shorts/abc123").unwrap();
        assert_eq!(video.id, "abc123");
        assert!(video.is_short_form);
    }

    #[test]
    fn rejects_wrong_length_standard_id() {
        assert!(extract_video_ref("https://www.youtube.com/watch?v=short").is_none());
    }

    #[test]
    fn rejects_unrelated_url() {
        assert!(extract_video_ref("https://example.com/not-a-video").is_none());
    }

    #[test]
    fn extraction_is_idempotent_through_a_canonical_watch_url() {
        let first = extract_video_ref("https://youtu.be/dQw4w9WgXcQ").unwrap();
        let canonical = format!("https://www.youtube.com/watch?v={}", first.id);
        let second = extract_video_ref(&canonical).unwrap();
        assert_eq!(first.id, second.id);
    }
}
