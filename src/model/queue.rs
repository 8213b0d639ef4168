use chrono::{DateTime, Utc};

use crate::model::submission::Submission;

/// An unclaimed submission in the queue, reduced to what the queue status needs.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueItem {
    pub id: u64,
    /// `r/<subreddit>` for Reddit posts, the raw Blossom source otherwise.
    pub source: String,
    pub create_time: DateTime<Utc>,
}

impl QueueItem {
    pub fn from_submission(submission: &Submission) -> Self {
        let source = match submission.subreddit() {
            Some(sub) => format!("r/{sub}"),
            None => submission.source.clone(),
        };

        Self {
            id: submission.id,
            source,
            create_time: submission.create_time,
        }
    }
}

/// Number of unclaimed submissions from one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCount {
    pub source: String,
    pub count: usize,
}
