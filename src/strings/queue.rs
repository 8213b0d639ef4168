use super::by_count;

pub const GETTING_QUEUE: &str = "Getting the current status of the queue...";
pub const EMBED_TITLE: &str = "Queue Status";
pub const UNCLAIMED_CLEARED: &str = "There are no unclaimed posts in the queue, great job! :tada:";
pub const NOT_LOADED: &str = "The queue hasn't been loaded yet, please try again in a minute.";

pub fn embed_message(duration: &str) -> String {
    format!("Here is the current status of the queue! ({duration})")
}

pub fn unclaimed_message(unclaimed_count: u64, source_list: &str) -> String {
    let headline = by_count(
        unclaimed_count,
        "There are no unclaimed posts.",
        "There is **1** unclaimed post:",
        "There are **{count}** unclaimed posts:",
    )
    .replace("{count}", &unclaimed_count.to_string());
    format!("{headline}\n\n{source_list}")
}

pub fn filtered_unclaimed_message(unclaimed_count: u64, source: &str) -> String {
    by_count(
        unclaimed_count,
        "There are no unclaimed posts from {source}.",
        "There is **1** unclaimed post from {source}.",
        "There are **{count}** unclaimed posts from {source}.",
    )
    .replace("{count}", &unclaimed_count.to_string())
    .replace("{source}", source)
}

pub fn source_list_entry(count: usize, source: &str) -> String {
    format!("- {count} from {source}")
}

pub fn source_list_others(post_count: usize, source_count: usize) -> String {
    let sources = by_count(source_count as u64, "sources", "other source", "other sources");
    format!("- {post_count} from {source_count} {sources}")
}

pub fn last_updated(time: &str) -> String {
    format!("Last updated {time}")
}
