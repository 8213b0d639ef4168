use super::days_ago;

pub fn getting_history(username: &str, time_str: &str) -> String {
    format!("Creating the history graph of u/{username} {time_str}...")
}

pub fn embed_title(name: &str) -> String {
    format!("History of {name}")
}

pub fn embed_message(duration: &str) -> String {
    format!("Here is your history graph! ({duration})")
}

pub fn embed_description(username: &str, gamma: u64, joined_days: i64, time_str: &str) -> String {
    format!(
        "u/{username} has {gamma} gamma and joined {}.\nShowing {time_str}.",
        days_ago(joined_days)
    )
}

pub const NO_HISTORY: &str = "There are no transcriptions in this time frame.";

pub fn text_fallback(start_gamma: u64, end_gamma: u64) -> String {
    format!("Gamma went from {start_gamma} to {end_gamma} in this time frame.")
}

pub const CHART_X_LABEL: &str = "Time";
pub const CHART_Y_LABEL: &str = "Gamma";
