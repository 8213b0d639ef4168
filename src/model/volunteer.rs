//! Volunteer domain model as returned by Blossom's `volunteer/` endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A transcription volunteer registered on Blossom.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Volunteer {
    pub id: u64,
    pub username: String,
    /// Number of completed transcriptions.
    pub gamma: u64,
    pub date_joined: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub accepted_coc: bool,
    #[serde(default)]
    pub blacklisted: bool,
}

impl Volunteer {
    /// Markdown link to the volunteer's Reddit profile.
    pub fn formatted_link(&self) -> String {
        format!("[{0}](https://reddit.com/u/{0})", self.username)
    }
}
