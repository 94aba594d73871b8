// Helper functions shared by backends and the session

use crate::models::DownloadFormat;

/// Format a second count as "m:ss", or "h:mm:ss" once it reaches an hour
pub fn format_duration(total_seconds: u64) -> String {
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;

    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Derive a filesystem-safe filename from a title and requested format.
/// Every character outside [A-Za-z0-9] becomes an underscore.
pub fn suggested_filename(title: &str, format: DownloadFormat) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}.{}", stem, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_seconds_only() {
        assert_eq!(format_duration(45), "0:45");
    }

    #[test]
    fn formats_minutes_with_padded_seconds() {
        assert_eq!(format_duration(125), "2:05");
    }

    #[test]
    fn formats_hours_with_padded_fields() {
        assert_eq!(format_duration(3661), "1:01:01");
    }

    #[test]
    fn formats_boundaries() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(3600), "1:00:00");
    }

    #[test]
    fn sanitizes_title_into_filename() {
        assert_eq!(
            suggested_filename(
                "How to Build a YouTube Downloader - Complete Tutorial",
                DownloadFormat::Video
            ),
            "How_to_Build_a_YouTube_Downloader___Complete_Tutorial.mp4"
        );
    }

    #[test]
    fn audio_filename_uses_mp3() {
        assert_eq!(
            suggested_filename("clip #1 (final)", DownloadFormat::Audio),
            "clip__1__final_.mp3"
        );
    }
}
