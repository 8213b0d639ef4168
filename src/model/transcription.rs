//! Transcription domain model as returned by Blossom's `transcription/` endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::util::parse::get_url_from_id;

/// Blossom ID of the OCR bot, whose transcriptions don't use the header/footer format.
const OCR_BOT_ID: u64 = 3;
const SEPARATOR: &str = "---";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transcription {
    pub id: u64,
    /// Blossom URL of the submission the transcription belongs to.
    pub submission: String,
    /// Blossom URL of the volunteer who wrote the transcription.
    pub author: String,
    pub create_time: DateTime<Utc>,
    #[serde(default)]
    pub original_id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// Link to the transcription comment on Reddit.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub removed_from_reddit: bool,
}

impl Transcription {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// The transcription without its header and footer.
    ///
    /// Volunteer transcriptions are formatted as `header --- content --- footer`;
    /// the content itself may contain further separators. Texts with fewer than
    /// two separators and OCR transcriptions are returned unchanged.
    pub fn content(&self) -> String {
        let text = self.text();
        if self.author == get_url_from_id("volunteer", OCR_BOT_ID) {
            return text.to_string();
        }

        let parts: Vec<&str> = text.split(SEPARATOR).collect();
        if parts.len() < 3 {
            return text.to_string();
        }

        parts[1..parts.len() - 1].join(SEPARATOR).trim().to_string()
    }
}
