pub mod config;
pub mod error;
pub mod summarize;
pub mod youtube;

use url::Url;

/// A single captioned segment
#[derive(Debug, Clone)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Complete transcript for a video
#[derive(Debug, Clone)]
pub struct Transcript {
    pub video_id: String,
    pub title: String,
    pub language: String,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Segment texts joined with single spaces, in chronological order
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Extract the video ID from a YouTube URL.
///
/// Long-form hosts yield the `v` query parameter; the short-link host yields
/// the path with its leading slash stripped. Any other host or unparseable
/// input yields `None`. The extracted ID can be empty (`?v=`, bare
/// `youtu.be/`); callers must reject empty IDs rather than treat them as
/// valid.
pub fn extract_video_id(input: &str) -> Option<String> {
    let parsed = Url::parse(input.trim()).ok()?;

    match parsed.host_str() {
        Some("www.youtube.com") | Some("youtube.com") => parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned()),
        Some("youtu.be") => parsed.path().strip_prefix('/').map(|id| id.to_string()),
        _ => None,
    }
}

/// Predictable thumbnail URL for a video ID
pub fn thumbnail_url(video_id: &str) -> String {
    format!("http://img.youtube.com/vi/{video_id}/0.jpg")
}
