//! # Strings Module
//!
//! Centralizes the user-facing texts of every command and event, so replies stay
//! consistent and can be reworded in one place. Texts that depend on a count pick
//! their template by bucket: zero, one or many items, or today, one day or many
//! days.

pub mod admin;
pub mod errors;
pub mod find;
pub mod heatmap;
pub mod history;
pub mod leaderboard;
pub mod modlog;
pub mod ping;
pub mod progress;
pub mod queue;
pub mod restrictor;
pub mod rules;
pub mod search;
pub mod stats;
pub mod welcome;

/// Picks the template matching the count: none, exactly one, or many.
pub fn by_count<'a>(count: u64, none: &'a str, one: &'a str, many: &'a str) -> &'a str {
    match count {
        0 => none,
        1 => one,
        _ => many,
    }
}

/// Describes an age in whole days: `today`, `1 day ago` or `N days ago`.
pub fn days_ago(days: i64) -> String {
    match days {
        ..=0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        _ => format!("{days} days ago"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_count_bucket() {
        assert_eq!(by_count(0, "none", "one", "many"), "none");
        assert_eq!(by_count(1, "none", "one", "many"), "one");
        assert_eq!(by_count(7, "none", "one", "many"), "many");
    }

    #[test]
    fn picks_day_bucket() {
        assert_eq!(days_ago(0), "today");
        assert_eq!(days_ago(1), "1 day ago");
        assert_eq!(days_ago(12), "12 days ago");
    }
}
