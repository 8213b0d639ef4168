//! Submission domain model as returned by Blossom's `submission/` endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A post on a partner subreddit that volunteers can transcribe.
///
/// Volunteers are referenced by their Blossom resource URL, e.g.
/// `https://grafeas.org/api/volunteer/3/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Submission {
    pub id: u64,
    #[serde(default)]
    pub original_id: Option<String>,
    pub create_time: DateTime<Utc>,
    #[serde(default)]
    pub claimed_by: Option<String>,
    #[serde(default)]
    pub claim_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_by: Option<String>,
    #[serde(default)]
    pub complete_time: Option<DateTime<Utc>>,
    pub source: String,
    /// Link to the post on the partner subreddit.
    #[serde(default)]
    pub url: Option<String>,
    /// Link to the post on r/TranscribersOfReddit.
    #[serde(default)]
    pub tor_url: Option<String>,
    /// Link to the media to transcribe.
    #[serde(default)]
    pub content_url: Option<String>,
    #[serde(default)]
    pub has_ocr_transcription: bool,
    #[serde(default)]
    pub archived: bool,
}

/// Progress of a submission through the claim/done cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Unclaimed,
    Claimed,
    Completed,
}

impl Submission {
    pub fn status(&self) -> SubmissionStatus {
        if self.completed_by.is_some() {
            SubmissionStatus::Completed
        } else if self.claimed_by.is_some() {
            SubmissionStatus::Claimed
        } else {
            SubmissionStatus::Unclaimed
        }
    }

    /// Name of the partner subreddit, taken from the post URL.
    ///
    /// Blossom doesn't store the subreddit, but the URL always has the form
    /// `https://reddit.com/r/<subreddit>/comments/...`.
    pub fn subreddit(&self) -> Option<&str> {
        self.url
            .as_deref()
            .and_then(|url| url.split('/').nth(4))
            .filter(|sub| !sub.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn submission(url: Option<&str>) -> Submission {
        Submission {
            id: 1,
            original_id: None,
            create_time: Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap(),
            claimed_by: None,
            claim_time: None,
            completed_by: None,
            complete_time: None,
            source: "reddit".to_string(),
            url: url.map(str::to_string),
            tor_url: None,
            content_url: None,
            has_ocr_transcription: false,
            archived: false,
        }
    }

    #[test]
    fn subreddit_from_url() {
        let sub = submission(Some("https://reddit.com/r/CuratedTumblr/comments/abc/title/"));
        assert_eq!(sub.subreddit(), Some("CuratedTumblr"));
        assert_eq!(submission(None).subreddit(), None);
    }

    #[test]
    fn status_prefers_completion() {
        let mut sub = submission(None);
        assert_eq!(sub.status(), SubmissionStatus::Unclaimed);

        sub.claimed_by = Some("https://grafeas.org/api/volunteer/5/".to_string());
        assert_eq!(sub.status(), SubmissionStatus::Claimed);

        sub.completed_by = sub.claimed_by.clone();
        assert_eq!(sub.status(), SubmissionStatus::Completed);
    }
}
