use std::fmt;

use gloo_net::http::{Request, Response};
use serde_json::json;

use crate::env_variable_utils::API_BASE_URL;
use crate::models::SummarizeResponse;

/// Failure categories for a summarize call. Transport and decode detail
/// never reaches the UI; each kind carries one human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizeErrorKind {
    NotFound,
    BadRequest,
    RateLimited,
    ServerError,
    NetworkOrUnknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeError {
    pub kind: SummarizeErrorKind,
}

impl SummarizeError {
    pub fn from_status(status: u16) -> Self {
        let kind = match status {
            404 => SummarizeErrorKind::NotFound,
            400 => SummarizeErrorKind::BadRequest,
            429 => SummarizeErrorKind::RateLimited,
            500 => SummarizeErrorKind::ServerError,
            _ => SummarizeErrorKind::NetworkOrUnknown,
        };
        Self { kind }
    }

    pub fn unknown() -> Self {
        Self {
            kind: SummarizeErrorKind::NetworkOrUnknown,
        }
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            SummarizeErrorKind::NotFound => {
                "Video not found. Please check the URL and try again."
            }
            SummarizeErrorKind::BadRequest => {
                "Invalid video URL. Please provide a valid YouTube URL."
            }
            SummarizeErrorKind::RateLimited => "Too many requests. Please try again later.",
            SummarizeErrorKind::ServerError => {
                "Server error. Please try again later or contact support."
            }
            SummarizeErrorKind::NetworkOrUnknown => {
                "Failed to summarize video. Please try again later."
            }
        }
    }
}

impl fmt::Display for SummarizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Requests a summary for the given video URL. Suspends until the
/// backend responds; every failure path collapses into a SummarizeError
/// with a user-facing message.
pub async fn summarize_video(video_url: &str) -> Result<SummarizeResponse, SummarizeError> {
    let backend_url = &*API_BASE_URL;
    let url = format!("{backend_url}/api/summarize");

    let request = Request::post(&url)
        .json(&json!({ "url": video_url }))
        .map_err(|e| {
            log::error!("failed to build summarize request: {e}");
            SummarizeError::unknown()
        })?;

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            log::error!("summarize request failed: {e}");
            return Err(SummarizeError::unknown());
        }
    };

    if !response.ok() {
        return Err(SummarizeError::from_status(response.status()));
    }

    response.json::<SummarizeResponse>().await.map_err(|e| {
        log::error!("failed to decode summarize response: {e}");
        SummarizeError::unknown()
    })
}

/// Backend health probe, response shape intentionally opaque.
pub async fn get_health() -> Result<Response, gloo_net::Error> {
    let backend_url = &*API_BASE_URL;
    Request::get(&format!("{backend_url}/")).send().await
}

/// Raw metadata lookup for a video URL, independent of the summarize
/// flow. Callers interpret the response themselves.
pub async fn get_raw_video_info(video_url: &str) -> Result<Response, gloo_net::Error> {
    let backend_url = &*API_BASE_URL;
    Request::post(&format!("{backend_url}/api/video-info"))
        .json(&json!({ "url": video_url }))?
        .send()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_known_codes() {
        assert_eq!(
            SummarizeError::from_status(404).kind,
            SummarizeErrorKind::NotFound
        );
        assert_eq!(
            SummarizeError::from_status(400).kind,
            SummarizeErrorKind::BadRequest
        );
        assert_eq!(
            SummarizeError::from_status(429).kind,
            SummarizeErrorKind::RateLimited
        );
        assert_eq!(
            SummarizeError::from_status(500).kind,
            SummarizeErrorKind::ServerError
        );
    }

    #[test]
    fn test_from_status_other_codes_are_generic() {
        for status in [0, 401, 403, 502, 503] {
            let err = SummarizeError::from_status(status);
            assert_eq!(err.kind, SummarizeErrorKind::NetworkOrUnknown);
            assert_eq!(err.message(), SummarizeError::unknown().message());
        }
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            SummarizeError::from_status(404).to_string(),
            "Video not found. Please check the URL and try again."
        );
        assert!(!SummarizeError::from_status(500)
            .message()
            .contains("HTTP"));
    }
}
