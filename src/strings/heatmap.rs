use super::days_ago;

pub fn getting_heatmap(username: &str) -> String {
    format!("Generating a heatmap for u/{username}...")
}

pub fn embed_title(name: &str) -> String {
    format!("Activity Heatmap of {name}")
}

pub fn embed_message(duration: &str) -> String {
    format!("Here is your heatmap! ({duration})")
}

pub fn embed_description(utc_offset: &str, joined_days: i64) -> String {
    format!(
        "Times are shown in {utc_offset}. Joined {}.",
        days_ago(joined_days)
    )
}

pub const NO_ACTIVITY: &str = "There is no activity to show yet.";

/// Text fallback when no chart can be rendered: the busiest slots.
pub fn text_fallback(busiest: &[String]) -> String {
    if busiest.is_empty() {
        return NO_ACTIVITY.to_string();
    }
    format!("Most active times:\n{}", busiest.join("\n"))
}

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub const CHART_TITLE: &str = "Activity";
