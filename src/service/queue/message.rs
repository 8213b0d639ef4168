//! Rendering of the queue status.

use serenity::all::CreateEmbed;
use std::collections::HashMap;

use super::QueueSnapshot;
use crate::{
    model::queue::{QueueItem, SourceCount},
    strings::queue,
    util::{format::get_discord_time_str, parse::extract_sub_name},
};

/// Sources listed by name; the rest are summed up in one line.
const LISTED_SOURCES: usize = 5;

/// Counts the items per source, most items first.
///
/// Sources with the same count are ordered by name so the list stays stable
/// between refreshes.
pub fn count_sources(items: &[QueueItem]) -> Vec<SourceCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        *counts.entry(item.source.as_str()).or_default() += 1;
    }

    let mut counts: Vec<SourceCount> = counts
        .into_iter()
        .map(|(source, count)| SourceCount {
            source: source.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.source.cmp(&b.source)));
    counts
}

/// Lists the top sources and sums up the remaining ones.
pub fn source_list(counts: &[SourceCount]) -> String {
    let mut lines: Vec<String> = counts
        .iter()
        .take(LISTED_SOURCES)
        .map(|entry| queue::source_list_entry(entry.count, &entry.source))
        .collect();

    if counts.len() > LISTED_SOURCES {
        let rest = &counts[LISTED_SOURCES..];
        let post_count = rest.iter().map(|entry| entry.count).sum();
        lines.push(queue::source_list_others(post_count, rest.len()));
    }

    lines.join("\n")
}

/// Normalizes a source filter to the form queue items use.
///
/// Subreddits may be given with or without `r/`; other sources are kept as-is.
fn normalize_source(source: &str, items: &[QueueItem]) -> String {
    let source = source.trim();
    let is_known_source = items
        .iter()
        .any(|item| item.source.eq_ignore_ascii_case(source));
    if is_known_source {
        source.to_string()
    } else {
        format!("r/{}", extract_sub_name(source))
    }
}

/// Describes the unclaimed submissions, optionally only those from one source.
///
/// # Arguments
/// - `items` - The unclaimed submissions in the queue
/// - `source` - Source filter, e.g. `CuratedTumblr` or `r/CuratedTumblr`
pub fn unclaimed_description(items: &[QueueItem], source: Option<&str>) -> String {
    if let Some(source) = source {
        let source = normalize_source(source, items);
        let count = items
            .iter()
            .filter(|item| item.source.eq_ignore_ascii_case(&source))
            .count();
        return queue::filtered_unclaimed_message(count as u64, &source);
    }

    if items.is_empty() {
        return queue::UNCLAIMED_CLEARED.to_string();
    }

    queue::unclaimed_message(items.len() as u64, &source_list(&count_sources(items)))
}

/// Builds the queue status embed.
///
/// # Returns
/// - `CreateEmbed` - The status, or a note that the queue isn't loaded yet
pub fn queue_embed(snapshot: Option<&QueueSnapshot>, source: Option<&str>) -> CreateEmbed {
    let embed = CreateEmbed::new().title(queue::EMBED_TITLE);

    let Some(snapshot) = snapshot else {
        return embed.description(queue::NOT_LOADED);
    };

    embed.description(format!(
        "{}\n\n{}",
        unclaimed_description(&snapshot.items, source),
        queue::last_updated(&get_discord_time_str(snapshot.updated_at, 'R'))
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn items(sources: &[(&str, usize)]) -> Vec<QueueItem> {
        let mut items = Vec::new();
        for (source, count) in sources {
            for _ in 0..*count {
                items.push(QueueItem {
                    id: items.len() as u64,
                    source: source.to_string(),
                    create_time: Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap(),
                });
            }
        }
        items
    }

    #[test]
    fn counts_sources_by_size() {
        let counts = count_sources(&items(&[("r/b", 1), ("r/a", 3), ("r/c", 1)]));

        let counts: Vec<(&str, usize)> = counts
            .iter()
            .map(|entry| (entry.source.as_str(), entry.count))
            .collect();
        assert_eq!(counts, vec![("r/a", 3), ("r/b", 1), ("r/c", 1)]);
    }

    /// Tests listing more sources than are shown by name.
    ///
    /// Expected: Five sources listed and one line for the remaining two
    #[test]
    fn sums_up_other_sources() {
        let counts = count_sources(&items(&[
            ("r/a", 7),
            ("r/b", 6),
            ("r/c", 5),
            ("r/d", 4),
            ("r/e", 3),
            ("r/f", 2),
            ("r/g", 1),
        ]));

        let list = source_list(&counts);

        assert_eq!(
            list,
            "- 7 from r/a\n- 6 from r/b\n- 5 from r/c\n- 4 from r/d\n- 3 from r/e\n\
             - 3 from 2 other sources"
        );
    }

    #[test]
    fn empty_queue_is_cleared() {
        assert_eq!(unclaimed_description(&[], None), queue::UNCLAIMED_CLEARED);
    }

    #[test]
    fn describes_unclaimed_posts() {
        let description = unclaimed_description(&items(&[("r/a", 2), ("reddit", 1)]), None);

        assert_eq!(
            description,
            "There are **3** unclaimed posts:\n\n- 2 from r/a\n- 1 from reddit"
        );
    }

    /// Tests filtering the queue by source.
    ///
    /// Verifies that subreddits match with and without prefix, in any case.
    #[test]
    fn filters_by_source() {
        let items = items(&[("r/CuratedTumblr", 2), ("r/a", 1)]);

        for filter in ["CuratedTumblr", "r/curatedtumblr", "/r/CuratedTumblr"] {
            let description = unclaimed_description(&items, Some(filter));
            assert!(description.starts_with("There are **2** unclaimed posts from r/"), "{filter}");
        }
        assert_eq!(
            unclaimed_description(&items, Some("r/none")),
            "There are no unclaimed posts from r/none."
        );
    }
}
