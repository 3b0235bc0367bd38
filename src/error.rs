use thiserror::Error;

/// Failure categories for transcript acquisition.
///
/// Classified as an ordered cascade: URL problems before any network call,
/// service-reported states next, then the catch-all carrying the underlying
/// message. Every variant is terminal for the request; nothing is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid YouTube URL")]
    InvalidUrl,

    #[error("video is unavailable or private")]
    VideoUnavailable,

    #[error("transcripts are disabled for this video")]
    TranscriptsDisabled,

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Unexpected(err.to_string())
    }
}

impl From<regex::Error> for FetchError {
    fn from(err: regex::Error) -> Self {
        FetchError::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(FetchError::InvalidUrl.to_string(), "invalid YouTube URL");
        assert_eq!(
            FetchError::VideoUnavailable.to_string(),
            "video is unavailable or private"
        );
        assert_eq!(
            FetchError::TranscriptsDisabled.to_string(),
            "transcripts are disabled for this video"
        );
        assert_eq!(
            FetchError::Unexpected("boom".to_string()).to_string(),
            "unexpected error: boom"
        );
    }
}
