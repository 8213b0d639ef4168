//! Parsing and formatting of the time phrases accepted by the chart commands.
//!
//! Users can give either a relative phrase ("3", "2 weeks ago", "1.5 y") or an
//! absolute date/time ("2021-09-13 13:20", "10:13"). All times are UTC. Every
//! function takes `now` explicitly so results are deterministic.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::time::TimeParseError;

static RELATIVE_TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<amount>\d+(?:\.\d+)?)\s*(?P<unit>[a-z]+)?(?:\s+ago)?$")
        .expect("relative time regex is valid")
});

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Words that leave the start of a time range open.
const START_KEYWORDS: [&str; 2] = ["none", "start"];
/// Words that leave the end of a time range open.
const END_KEYWORDS: [&str; 3] = ["none", "end", "now"];

/// A unit accepted in relative time phrases.
struct TimeUnit {
    /// Plural name used when formatting.
    key: &'static str,
    aliases: &'static [&'static str],
    seconds: f64,
}

const TIME_UNITS: [TimeUnit; 7] = [
    TimeUnit {
        key: "seconds",
        aliases: &["s", "sec", "secs", "second", "seconds"],
        seconds: 1.0,
    },
    TimeUnit {
        key: "minutes",
        aliases: &["min", "mins", "minute", "minutes"],
        seconds: 60.0,
    },
    TimeUnit {
        key: "hours",
        aliases: &["h", "hr", "hrs", "hour", "hours"],
        seconds: 3_600.0,
    },
    TimeUnit {
        key: "days",
        aliases: &["d", "day", "days"],
        seconds: 86_400.0,
    },
    TimeUnit {
        key: "weeks",
        aliases: &["w", "week", "weeks"],
        seconds: 604_800.0,
    },
    TimeUnit {
        key: "months",
        aliases: &["month", "months"],
        seconds: 30.0 * 86_400.0,
    },
    TimeUnit {
        key: "years",
        aliases: &["y", "year", "years"],
        seconds: 365.0 * 86_400.0,
    },
];

/// Formats an absolute time as compactly as possible.
///
/// Times on the same day as `now` are shown without date, midnight is shown
/// without time, and seconds are only shown when they aren't zero.
pub fn format_absolute_datetime(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let time_format = if time.second() == 0 { "%H:%M" } else { "%H:%M:%S" };

    if time.date_naive() == now.date_naive() {
        return time.format(time_format).to_string();
    }

    if time.hour() == 0 && time.minute() == 0 && time.second() == 0 {
        return time.format("%Y-%m-%d").to_string();
    }

    time.format(&format!("%Y-%m-%d {time_format}")).to_string()
}

/// Formats a relative time such as `3 hours ago` or `1 hour ago`.
///
/// # Arguments
/// - `amount` - Number of units; whole numbers are printed without decimals
/// - `unit_key` - Plural unit name, e.g. `hours`
pub fn format_relative_datetime(amount: f64, unit_key: &str) -> String {
    let unit = if amount == 1.0 {
        unit_key.strip_suffix('s').unwrap_or(unit_key)
    } else {
        unit_key
    };

    let amount = if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    };

    format!("{amount} {unit} ago")
}

/// Parses a relative or absolute time phrase.
///
/// # Returns
/// - `Ok((DateTime<Utc>, String))` - The point in time and a normalized description
/// - `Err(TimeParseError)` - The phrase couldn't be understood
pub fn try_parse_time(
    input: &str,
    now: DateTime<Utc>,
) -> Result<(DateTime<Utc>, String), TimeParseError> {
    let input = input.trim();

    if let Some(caps) = RELATIVE_TIME_REGEX.captures(input) {
        let amount: f64 = caps["amount"]
            .parse()
            .map_err(|_| TimeParseError::InvalidTime(input.to_string()))?;
        let unit_input = caps
            .name("unit")
            .map(|unit| unit.as_str().to_lowercase())
            .unwrap_or_else(|| "hours".to_string());
        let unit = TIME_UNITS
            .iter()
            .find(|unit| unit.aliases.contains(&unit_input.as_str()))
            .ok_or(TimeParseError::InvalidUnit(unit_input))?;

        let time = Duration::try_milliseconds((amount * unit.seconds * 1000.0).round() as i64)
            .and_then(|offset| now.checked_sub_signed(offset))
            .ok_or_else(|| TimeParseError::InvalidTime(input.to_string()))?;
        return Ok((time, format_relative_datetime(amount, unit.key)));
    }

    let time = parse_absolute_datetime(input, now)
        .ok_or_else(|| TimeParseError::InvalidTime(input.to_string()))?;
    Ok((time, format_absolute_datetime(time, now)))
}

fn parse_absolute_datetime(input: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    for format in DATETIME_FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(input, format) {
            return Some(time.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }

    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(input, format) {
            return Some(now.date_naive().and_time(time).and_utc());
        }
    }

    None
}

/// Parses the optional `after`/`before` command options into a time range.
///
/// `none`/`start` leave the start open and `none`/`end`/`now` leave the end open.
///
/// # Returns
/// - `Ok((after, before, description))` - Bounds and a text like
///   `from 3 hours ago until now`
/// - `Err(TimeParseError)` - One of the bounds couldn't be parsed
pub fn parse_time_constraints(
    after: Option<&str>,
    before: Option<&str>,
    now: DateTime<Utc>,
) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>, String), TimeParseError> {
    let (after_time, after_str) = match after.map(str::trim) {
        Some(value) if !START_KEYWORDS.contains(&value.to_lowercase().as_str()) => {
            let (time, description) = try_parse_time(value, now)?;
            (Some(time), description)
        }
        _ => (None, "the start".to_string()),
    };

    let (before_time, before_str) = match before.map(str::trim) {
        Some(value) if !END_KEYWORDS.contains(&value.to_lowercase().as_str()) => {
            let (time, description) = try_parse_time(value, now)?;
            (Some(time), description)
        }
        _ => (None, "now".to_string()),
    };

    Ok((
        after_time,
        before_time,
        format!("from {after_str} until {before_str}"),
    ))
}
