use pulldown_cmark::{html, Options, Parser};

const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi";

/// URL markers checked in precedence order when extracting a video id.
const VIDEO_ID_MARKERS: [&str; 4] = ["v=", "youtu.be/", "embed/", "shorts/"];

/// Pulls the video id out of any of the supported YouTube URL shapes
/// (watch, short link, embed, shorts). Returns an empty string when no
/// marker matches.
pub fn extract_video_id(url: &str) -> String {
    for marker in VIDEO_ID_MARKERS {
        if let Some(pos) = url.find(marker) {
            let rest = &url[pos + marker.len()..];
            let end = rest.find(['&', '?']).unwrap_or(rest.len());
            return rest[..end].to_string();
        }
    }
    String::new()
}

/// Best-quality thumbnail for a video id, empty string for an empty id.
pub fn thumbnail_url(video_id: &str) -> String {
    thumbnail_url_with_quality(video_id, "maxresdefault")
}

pub fn thumbnail_url_with_quality(video_id: &str, quality: &str) -> String {
    if video_id.is_empty() {
        return String::new();
    }
    format!("{THUMBNAIL_HOST}/{video_id}/{quality}.jpg")
}

/// Next image source to try after `current_src` failed to load, walking
/// maxresdefault -> hqdefault -> mqdefault -> default and finally the
/// server-provided fallback when it differs from the failing source.
/// Returns None once the ladder is exhausted.
pub fn next_thumbnail(
    current_src: &str,
    video_id: &str,
    server_fallback: Option<&str>,
) -> Option<String> {
    // The server fallback is the end of the line, even if it happens to
    // contain one of the quality markers.
    if let Some(fallback) = server_fallback {
        if fallback == current_src {
            return None;
        }
    }

    if current_src.contains("maxresdefault") {
        Some(thumbnail_url_with_quality(video_id, "hqdefault"))
    } else if current_src.contains("hqdefault") {
        Some(thumbnail_url_with_quality(video_id, "mqdefault"))
    } else if current_src.contains("mqdefault") {
        Some(thumbnail_url_with_quality(video_id, "default"))
    } else {
        match server_fallback {
            Some(fallback) if !fallback.is_empty() => Some(fallback.to_string()),
            _ => None,
        }
    }
}

/// Formats a duration in seconds as H:MM:SS, or M:SS below one hour.
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return "Unknown duration".to_string();
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Formats a view count with a B/M/K suffix and one decimal place.
pub fn format_views(views: u64) -> String {
    if views == 0 {
        return "Unknown views".to_string();
    }
    if views >= 1_000_000_000 {
        format!("{:.1}B views", views as f64 / 1_000_000_000.0)
    } else if views >= 1_000_000 {
        format!("{:.1}M views", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K views", views as f64 / 1_000.0)
    } else {
        format!("{views} views")
    }
}

/// Reduces a backend-provided publish date to YYYY-MM-DD. The backend
/// sends either RFC 3339 or a bare "%Y-%m-%d %H:%M:%S" timestamp;
/// anything else is echoed back unchanged.
pub fn format_publish_date(raw: &str) -> String {
    if let Ok(datetime) = raw.parse::<chrono::DateTime<chrono::Utc>>() {
        return datetime.format("%Y-%m-%d").to_string();
    }
    if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return datetime.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_len).collect();
        format!("{head}...")
    }
}

/// Renders the summary markdown to an HTML fragment for display through
/// `Html::from_html_unchecked`. The summary comes from our own backend,
/// which this client trusts.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_extract_video_id_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=abc"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_extract_video_id_embed_and_shorts() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/shorts/abc123XYZ_-"),
            "abc123XYZ_-"
        );
    }

    #[test]
    fn test_extract_video_id_unrecognized() {
        assert_eq!(extract_video_id("https://example.com/video/123"), "");
        assert_eq!(extract_video_id(""), "");
    }

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url("abc"),
            "https://img.youtube.com/vi/abc/maxresdefault.jpg"
        );
        assert_eq!(thumbnail_url(""), "");
    }

    #[test]
    fn test_next_thumbnail_walks_quality_ladder() {
        let id = "abc";
        let fallback = Some("https://cdn.example.com/fallback.jpg");

        let first = thumbnail_url(id);
        let second = next_thumbnail(&first, id, fallback).unwrap();
        assert!(second.contains("hqdefault"));
        let third = next_thumbnail(&second, id, fallback).unwrap();
        assert!(third.contains("mqdefault"));
        let fourth = next_thumbnail(&third, id, fallback).unwrap();
        assert!(fourth.ends_with("/default.jpg"));
        let fifth = next_thumbnail(&fourth, id, fallback).unwrap();
        assert_eq!(fifth, "https://cdn.example.com/fallback.jpg");
        assert_eq!(next_thumbnail(&fifth, id, fallback), None);
    }

    #[test]
    fn test_next_thumbnail_stops_without_fallback() {
        let exhausted = thumbnail_url_with_quality("abc", "default");
        assert_eq!(next_thumbnail(&exhausted, "abc", None), None);
    }

    #[test]
    fn test_next_thumbnail_does_not_rewalk_from_fallback() {
        // A server fallback that itself points at a maxresdefault image
        // must not restart the ladder.
        let fallback = "https://img.youtube.com/vi/other/maxresdefault.jpg";
        assert_eq!(next_thumbnail(fallback, "abc", Some(fallback)), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "Unknown duration");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(3725), "1:02:05");
    }

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(0), "Unknown views");
        assert_eq!(format_views(999), "999 views");
        assert_eq!(format_views(1500), "1.5K views");
        assert_eq!(format_views(2_500_000), "2.5M views");
        assert_eq!(format_views(1_200_000_000), "1.2B views");
    }

    #[test]
    fn test_format_publish_date() {
        assert_eq!(format_publish_date("2024-01-02 15:04:05"), "2024-01-02");
        assert_eq!(format_publish_date("2024-01-02T15:04:05Z"), "2024-01-02");
        assert_eq!(format_publish_date("not a date"), "not a date");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a rather long title", 8), "a rather...");
    }

    #[test]
    fn test_render_markdown() {
        let html = render_markdown("## Heading\n\n- one\n- two");
        assert!(html.contains("<h2>"));
        assert!(html.contains("<li>one</li>"));
    }
}
