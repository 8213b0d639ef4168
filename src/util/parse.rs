//! Parsing of display names, subreddit names and Blossom resource URLs.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a display name of the form `[/]u/<username><rest>`.
///
/// The prefix is optional so plain usernames given as command options match too.
pub static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix>(?P<leading_slash>/)?u/)?(?P<username>\S+)(?P<rest>.*)$")
        .expect("username regex is valid")
});

/// Matches a UTC offset like `UTC+2`, `utc-05:00` or `UTC+10.5`.
static UTC_OFFSET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bUTC(?P<sign>[+-])(?P<hours>\d{1,2})(?::(?P<minutes>\d{2})|\.(?P<fraction>\d+))?",
    )
    .expect("utc offset regex is valid")
});

/// Prefix every compliant display name starts with.
pub const DISPLAY_NAME_PREFIX: &str = "/u/";

/// Extracts the Reddit username from a display name or command option.
///
/// Accepts `user`, `u/user` and `/u/user`, ignoring anything after the first
/// whitespace (flair, UTC offsets, ...).
///
/// # Returns
/// - `Some(String)` - The username without prefix
/// - `None` - The input is empty or only whitespace
pub fn extract_username(display_name: &str) -> Option<String> {
    USERNAME_REGEX
        .captures(display_name.trim())
        .and_then(|caps| caps.name("username"))
        .map(|m| m.as_str().to_string())
}

/// Extracts the username from a display name following the `/u/<username>` convention.
///
/// Unlike [`extract_username`] this requires the full `/u/` prefix, so it can be
/// used to check whether a member complies with the naming rules.
pub fn username_from_display_name(display_name: &str) -> Option<String> {
    let first_part = display_name.split_whitespace().next()?;
    let username = first_part.strip_prefix(DISPLAY_NAME_PREFIX)?;

    if username.is_empty() {
        return None;
    }

    Some(username.to_string())
}

/// Extracts the name of a subreddit without its `r/` or `/r/` prefix.
pub fn extract_sub_name(subreddit: &str) -> &str {
    let subreddit = subreddit.trim();
    subreddit
        .strip_prefix("/r/")
        .or_else(|| subreddit.strip_prefix("r/"))
        .unwrap_or(subreddit)
}

/// Extracts the UTC offset in seconds from a display name.
///
/// Only the part after the username is searched, so a username that happens to
/// look like an offset (`/u/UTC+10`) isn't mistaken for one.
///
/// # Returns
/// - Offset in seconds, `0` when the display name doesn't contain one
pub fn extract_utc_offset(display_name: &str) -> i32 {
    let Some(rest) = USERNAME_REGEX
        .captures(display_name)
        .and_then(|caps| caps.name("rest"))
    else {
        return 0;
    };

    let Some(caps) = UTC_OFFSET_REGEX.captures(rest.as_str()) else {
        return 0;
    };

    let sign = if &caps["sign"] == "-" { -1 } else { 1 };
    let hours: i32 = caps["hours"].parse().unwrap_or(0);

    let minutes: i32 = if let Some(minutes) = caps.name("minutes") {
        minutes.as_str().parse().unwrap_or(0)
    } else if let Some(fraction) = caps.name("fraction") {
        let fraction: f64 = format!("0.{}", fraction.as_str()).parse().unwrap_or(0.0);
        (fraction * 60.0).round() as i32
    } else {
        0
    };

    sign * (hours * 3600 + minutes * 60)
}

/// Formats a UTC offset in seconds as `UTC+HH:MM`.
pub fn utc_offset_to_str(utc_offset: i32) -> String {
    let sign = if utc_offset < 0 { '-' } else { '+' };
    let offset = utc_offset.unsigned_abs();
    let hours = offset / 3600;
    let minutes = (offset % 3600) / 60;

    format!("UTC{sign}{hours:02}:{minutes:02}")
}

/// Extracts the ID from a Blossom resource URL such as `https://grafeas.org/api/volunteer/3/`.
pub fn get_id_from_url(blossom_url: &str) -> Option<u64> {
    blossom_url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|id| id.parse().ok())
}

/// Builds the Blossom resource URL for the given type and ID.
pub fn get_url_from_id(kind: &str, id: u64) -> String {
    format!("https://grafeas.org/api/{kind}/{id}/")
}
