//! Transcription factory for creating `transcription/` response entries.

use serde_json::{json, Value};

use super::resource_url;

/// Factory for creating test transcriptions with customizable fields.
pub struct TranscriptionFactory {
    id: u64,
    submission_id: u64,
    author_id: u64,
    url: Option<String>,
    text: String,
}

impl TranscriptionFactory {
    /// Creates a new TranscriptionFactory.
    ///
    /// Defaults:
    /// - url: none
    /// - text: an image transcription with header, `Hello world` and footer
    ///
    /// # Arguments
    /// - `id` - Blossom ID of the transcription
    /// - `submission_id` - Blossom ID of the submission it belongs to
    /// - `author_id` - Blossom ID of the volunteer who wrote it
    pub fn new(id: u64, submission_id: u64, author_id: u64) -> Self {
        Self {
            id,
            submission_id,
            author_id,
            url: None,
            text: "*Image Transcription*\n\n---\n\nHello world\n\n---\n\n^^I'm&#32;a&#32;human".to_string(),
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "submission": resource_url("submission", self.submission_id),
            "author": resource_url("volunteer", self.author_id),
            "create_time": "2021-06-01T13:00:00Z",
            "last_update_time": "2021-06-01T13:00:00Z",
            "original_id": format!("t1_{}", self.id),
            "source": "reddit",
            "url": self.url,
            "text": self.text,
            "removed_from_reddit": false,
        })
    }
}

/// Creates a posted transcription with the given text.
pub fn create_transcription(id: u64, submission_id: u64, author_id: u64, text: &str) -> Value {
    TranscriptionFactory::new(id, submission_id, author_id)
        .url(&format!(
            "https://reddit.com/r/CuratedTumblr/comments/{submission_id}/post/{id}/"
        ))
        .text(text)
        .build()
}
