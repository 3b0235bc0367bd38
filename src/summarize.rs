use eyre::{Result, bail};
use log::debug;

use crate::config::Credentials;

/// Default Gemini model for summarization
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Instruction template sent ahead of the transcript. The transcript is
/// appended directly after the trailing text, with no extra separator.
pub const SUMMARY_PROMPT: &str = "Analyze the provided YouTube transcript and extract the most valuable information into a structured, scannable summary under 250 words.

Required Output Structure:
**MAIN TOPIC:** [Single sentence capturing video's core purpose]

**KEY POINTS:**
• [Most important insight/takeaway]
• [Second most important point]
• [Third key point]
• [Additional points as needed, max 5 total]

**ACTIONABLE ITEMS:** [If any - steps, recommendations, or calls-to-action]

**NOTABLE DETAILS:** [Statistics, examples, or supporting facts worth remembering]

Processing Instructions:
1. Identify the video's primary objective and target audience
2. Extract information in order of importance/impact
3. Prioritize actionable content over theoretical discussion
4. Preserve specific data points (numbers, percentages, dates)
5. Eliminate transcript artifacts (filler words, repetitions, \"um,\" \"uh\")
6. Focus on \"what the viewer should know/do after watching\"

Transcript to summarize: ";

/// Generate a summary of a transcript via the Gemini API.
///
/// The response text is returned verbatim; no post-processing and no retry.
pub async fn generate_summary(
    client: &reqwest::Client,
    credentials: &Credentials,
    model: &str,
    instructions: &str,
    transcript_text: &str,
) -> Result<String> {
    debug!("Summarizing via Gemini API with model {model}");

    let prompt = build_prompt(instructions, transcript_text);

    let body = serde_json::json!({
        "contents": [
            {
                "parts": [
                    { "text": prompt }
                ]
            }
        ]
    });

    let url = format!("https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent");

    let resp = client
        .post(&url)
        .query(&[("key", credentials.gemini_api_key.as_str())])
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("Gemini API returned {status}: {body}");
    }

    let json: serde_json::Value = resp.json().await?;
    extract_gemini_text(&json)
}

/// Template first, transcript appended with no separator beyond the
/// template's trailing text
fn build_prompt(instructions: &str, transcript_text: &str) -> String {
    format!("{instructions}{transcript_text}")
}

fn extract_gemini_text(json: &serde_json::Value) -> Result<String> {
    if let Some(parts) = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
    {
        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text")?.as_str().map(|s| s.to_string()))
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Ok(text);
        }
    }
    bail!("unexpected Gemini API response format");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_appends_directly() {
        let prompt = build_prompt("Summarize this: ", "Hello world");
        assert_eq!(prompt, "Summarize this: Hello world");
    }

    #[test]
    fn test_default_prompt_ends_ready_for_transcript() {
        assert!(SUMMARY_PROMPT.ends_with("Transcript to summarize: "));
    }

    #[test]
    fn test_extract_gemini_text() {
        let json = serde_json::json!({
            "candidates": [
                {
                    "content": {
                        "parts": [
                            { "text": "Here is the summary." }
                        ],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }
            ]
        });
        assert_eq!(extract_gemini_text(&json).unwrap(), "Here is the summary.");
    }

    #[test]
    fn test_extract_gemini_text_multiple_parts() {
        let json = serde_json::json!({
            "candidates": [
                {
                    "content": {
                        "parts": [
                            { "text": "Part one. " },
                            { "text": "Part two." }
                        ]
                    }
                }
            ]
        });
        assert_eq!(extract_gemini_text(&json).unwrap(), "Part one. Part two.");
    }

    #[test]
    fn test_extract_gemini_text_no_candidates() {
        let json = serde_json::json!({"candidates": []});
        assert!(extract_gemini_text(&json).is_err());
    }

    #[test]
    fn test_extract_gemini_text_empty_parts() {
        let json = serde_json::json!({
            "candidates": [
                { "content": { "parts": [] } }
            ]
        });
        assert!(extract_gemini_text(&json).is_err());
    }
}
