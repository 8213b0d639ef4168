use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Transcriptions completed in one time bucket of `submission/rate/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateEntry {
    /// Start of the bucket.
    pub date: DateTime<Utc>,
    pub count: u64,
}

/// One point of a volunteer's gamma history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GammaPoint {
    pub time: DateTime<Utc>,
    /// Total gamma reached at `time`.
    pub gamma: u64,
}
