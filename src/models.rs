use serde::{Deserialize, Serialize};

/// Video metadata as returned by the backend. Held verbatim, never mutated
/// locally; fields the backend could not resolve come back zeroed or absent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoInfo {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub views: u64,
    /// Duration in seconds, 0 when unknown.
    #[serde(default)]
    pub length: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, alias = "publishDate")]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Markdown-formatted summary text.
    pub summary: String,
    pub video_info: VideoInfo,
    /// Server-chosen thumbnail URL, used only as the last fallback
    /// after the client-side quality ladder is exhausted.
    #[serde(default, alias = "thumbnail_url")]
    pub thumbnail: String,
    #[serde(default)]
    pub is_music_video: bool,
    #[serde(default)]
    pub has_transcript: bool,
    /// Opaque confidence value computed by the backend.
    #[serde(default)]
    pub success_score: f64,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_response_decodes_backend_payload() {
        let raw = r###"{
            "summary": "## Key points\n- one",
            "thumbnail_url": "https://img.youtube.com/vi/abc123/maxresdefault.jpg",
            "video_info": {
                "title": "A video",
                "author": "Someone",
                "views": 1200,
                "length": 65,
                "language": "en",
                "publish_date": "2024-01-02 00:00:00",
                "description": "desc"
            },
            "has_transcript": true,
            "is_music_video": false,
            "success_score": 6
        }"###;

        let response: SummarizeResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.video_info.title, "A video");
        assert_eq!(response.video_info.length, 65);
        assert!(response.thumbnail.contains("maxresdefault"));
        assert!(response.has_transcript);
        assert!((response.success_score - 6.0).abs() < f64::EPSILON);
        assert!(response.error.is_none());
    }

    #[test]
    fn test_video_info_tolerates_missing_optional_fields() {
        let raw = r#"{"title": "t", "author": "a"}"#;
        let info: VideoInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.views, 0);
        assert_eq!(info.length, 0);
        assert!(info.publish_date.is_none());
    }
}
