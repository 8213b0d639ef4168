use crate::util::format::format_number;

pub const GETTING_STATS: &str = "Getting stats for all users...";
pub const FAILED: &str = "Failed to get the stats for all users.";
pub const EMBED_TITLE: &str = "Stats";

pub fn embed_description(volunteers: u64, transcriptions: u64, days: u64) -> String {
    format!(
        "**Volunteers**: {}\n**Transcriptions**: {}\n**Days Since Inception**: {}",
        format_number(volunteers),
        format_number(transcriptions),
        format_number(days)
    )
}

pub fn embed_message(duration: &str) -> String {
    format!("Here are the stats! ({duration})")
}
