//! Formatting helpers shared by the command responses.

use chrono::{DateTime, Utc};
use std::time::Instant;

use crate::model::volunteer::Volunteer;

/// A community rank, awarded by gamma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rank {
    pub name: &'static str,
    /// Minimum gamma required for the rank.
    pub threshold: u64,
    /// Hex color of the rank's flair, `#rrggbb`.
    pub color: &'static str,
}

/// Ranks ordered by threshold, lowest first.
pub const RANKS: [Rank; 10] = [
    Rank { name: "Visitor", threshold: 0, color: "#888888" },
    Rank { name: "Initiate", threshold: 1, color: "#ffffff" },
    Rank { name: "Green", threshold: 51, color: "#00ff00" },
    Rank { name: "Teal", threshold: 101, color: "#00cccc" },
    Rank { name: "Purple", threshold: 251, color: "#ff67ff" },
    Rank { name: "Gold", threshold: 501, color: "#ffd700" },
    Rank { name: "Diamond", threshold: 1001, color: "#add8e6" },
    Rank { name: "Ruby", threshold: 2501, color: "#ff7ac2" },
    Rank { name: "Topaz", threshold: 5001, color: "#ff7d4d" },
    Rank { name: "Jade", threshold: 10001, color: "#31c831" },
];

/// Characters with a meaning in Discord markdown.
const FORMATTING_CHARS: [char; 5] = ['*', '_', '~', '|', '`'];

/// Escapes Discord markdown so usernames like `__name__` are shown literally.
pub fn escape_formatting(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if FORMATTING_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Formats the username of the volunteer, or "everyone" when no volunteer is given.
pub fn get_username(volunteer: Option<&Volunteer>) -> String {
    match volunteer {
        Some(volunteer) => format!("u/{}", escape_formatting(&volunteer.username)),
        None => "everyone".to_string(),
    }
}

/// Joins the items as an English enumeration: `a`, `a and b`, `a, b and c`.
pub fn join_items_with_and(items: &[impl AsRef<str>]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let init: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", init.join(", "), last.as_ref())
        }
    }
}

/// Renders a textual progress bar such as `[####      ] (4/10)`.
///
/// # Arguments
/// - `count` - Progress so far
/// - `total` - Goal; a zero goal renders an empty bar
/// - `width` - Number of characters between the brackets
/// - `display_count` - Append ` (count/total)`
/// - `as_code` - Wrap the bar in backticks so Discord renders it monospaced
pub fn get_progress_bar(
    count: u64,
    total: u64,
    width: usize,
    display_count: bool,
    as_code: bool,
) -> String {
    let ratio = if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    };
    let filled = ((ratio * width as f64).round() as usize).min(width);

    let mut bar = format!("[{}{}]", "#".repeat(filled), " ".repeat(width - filled));
    if as_code {
        bar = format!("`{bar}`");
    }
    if display_count {
        bar = format!("{bar} ({count}/{total})");
    }
    bar
}

/// Formats the time elapsed since `start` in whole milliseconds.
pub fn get_duration_str(start: Instant) -> String {
    format!("{} ms", start.elapsed().as_millis())
}

/// Formats a timestamp so Discord renders it in the reader's local time.
///
/// # Arguments
/// - `time` - The point in time to render
/// - `style` - Discord timestamp style, e.g. `f` (short date/time) or `R` (relative)
pub fn get_discord_time_str(time: DateTime<Utc>, style: char) -> String {
    format!("<t:{}:{}>", time.timestamp(), style)
}

/// Limits the string to the given number of characters, ending in `...` when cut.
pub fn limit_str(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let cut: String = text.chars().take(limit.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Determines the rank for the given gamma.
pub fn get_rank(gamma: u64) -> Rank {
    RANKS
        .iter()
        .rev()
        .find(|rank| gamma >= rank.threshold)
        .copied()
        .unwrap_or(RANKS[0])
}

/// Parses a `#rrggbb` hex color into its RGB components.
pub fn get_rgb_from_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Formats a number with `,` as thousands separator.
pub fn format_number(number: u64) -> String {
    let digits = number.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

/// Picks the singular or plural form for the count.
pub fn pluralize<'a>(count: u64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
