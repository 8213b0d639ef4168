use serde::Deserialize;

/// Transcriptions completed in one weekday/hour slot, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HeatmapEntry {
    /// Weekday, `1` (Monday) to `7` (Sunday).
    pub day: u8,
    /// Hour of the day, `0` to `23`.
    pub hour: u8,
    pub count: u64,
}
