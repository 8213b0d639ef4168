//! Submission factory for creating `submission/` response entries.

use serde_json::{json, Value};

use super::resource_url;

/// Factory for creating test submissions with customizable fields.
///
/// Defaults to an unclaimed Reddit submission without URLs.
pub struct SubmissionFactory {
    id: u64,
    create_time: String,
    claimed_by: Option<u64>,
    completed_by: Option<u64>,
    source: String,
    url: Option<String>,
    tor_url: Option<String>,
    content_url: Option<String>,
    has_ocr_transcription: bool,
    archived: bool,
}

impl SubmissionFactory {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            create_time: "2021-06-01T12:00:00Z".to_string(),
            claimed_by: None,
            completed_by: None,
            source: "reddit".to_string(),
            url: None,
            tor_url: None,
            content_url: None,
            has_ocr_transcription: false,
            archived: false,
        }
    }

    pub fn create_time(mut self, create_time: &str) -> Self {
        self.create_time = create_time.to_string();
        self
    }

    /// Marks the submission as claimed by the volunteer with the ID.
    pub fn claimed_by(mut self, volunteer_id: u64) -> Self {
        self.claimed_by = Some(volunteer_id);
        self
    }

    /// Marks the submission as claimed and completed by the volunteer with the ID.
    pub fn completed_by(mut self, volunteer_id: u64) -> Self {
        self.claimed_by = Some(volunteer_id);
        self.completed_by = Some(volunteer_id);
        self
    }

    pub fn source(mut self, source: &str) -> Self {
        self.source = source.to_string();
        self
    }

    /// Sets the link to the post on the partner subreddit.
    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn tor_url(mut self, tor_url: &str) -> Self {
        self.tor_url = Some(tor_url.to_string());
        self
    }

    pub fn content_url(mut self, content_url: &str) -> Self {
        self.content_url = Some(content_url.to_string());
        self
    }

    pub fn has_ocr_transcription(mut self, has_ocr_transcription: bool) -> Self {
        self.has_ocr_transcription = has_ocr_transcription;
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn build(self) -> Value {
        let volunteer_url = |id: Option<u64>| id.map(|id| resource_url("volunteer", id));
        let time = |id: Option<u64>| id.map(|_| "2021-06-01T13:00:00Z");

        json!({
            "id": self.id,
            "original_id": format!("t3_{}", self.id),
            "create_time": self.create_time,
            "last_update_time": self.create_time,
            "claimed_by": volunteer_url(self.claimed_by),
            "claim_time": time(self.claimed_by),
            "completed_by": volunteer_url(self.completed_by),
            "complete_time": time(self.completed_by),
            "source": self.source,
            "url": self.url,
            "tor_url": self.tor_url,
            "content_url": self.content_url,
            "has_ocr_transcription": self.has_ocr_transcription,
            "transcription_set": [],
            "archived": self.archived,
            "cannot_ocr": false,
            "redis_id": null,
        })
    }
}

/// Creates an unclaimed submission from the subreddit.
pub fn create_submission(id: u64, subreddit: &str) -> Value {
    SubmissionFactory::new(id)
        .url(&format!(
            "https://reddit.com/r/{subreddit}/comments/{id}/post/"
        ))
        .build()
}
