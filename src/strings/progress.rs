use super::by_count;

/// Transcriptions per 24 hours needed to reach the daily goal.
pub const DAILY_GOAL: u64 = 100;

pub fn getting_progress(username: &str) -> String {
    format!("Getting the daily progress of u/{username}...")
}

pub fn embed_title(name: &str) -> String {
    format!("Daily Progress of {name}")
}

pub fn embed_message(duration: &str) -> String {
    format!("Here is your progress! ({duration})")
}

pub fn embed_description(count: u64, bar: &str) -> String {
    let summary = by_count(
        count,
        "No transcriptions in the last 24 hours.",
        "**1** transcription in the last 24 hours.",
        "**{count}** transcriptions in the last 24 hours.",
    )
    .replace("{count}", &count.to_string());

    if count >= DAILY_GOAL {
        format!("{summary}\n\n{bar}\n\nYou reached the daily goal, amazing! :tada:")
    } else {
        format!("{summary}\n\n{bar}")
    }
}
