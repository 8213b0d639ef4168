use serde::Deserialize;

/// Community-wide totals from Blossom's `summary/` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Summary {
    pub volunteer_count: u64,
    pub transcription_count: u64,
    pub days_since_inception: u64,
}
