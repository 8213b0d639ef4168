use super::by_count;
use crate::util::format::format_number;

pub fn searching(query: &str) -> String {
    format!("Searching for `{query}`...")
}

pub fn no_results(query: &str) -> String {
    format!("No results for `{query}` found.")
}

pub fn embed_title(query: &str) -> String {
    format!("Results for `{query}`")
}

/// Reply content above the results embed.
pub fn embed_message(total: u64, duration: &str) -> String {
    let template = by_count(
        total,
        "No results found",
        "Found 1 result",
        "Found {count} results",
    );
    format!(
        "{} ({duration})",
        template.replace("{count}", &format_number(total))
    )
}

pub fn page_footer(page: usize, page_count: usize) -> String {
    format!("Page {page}/{page_count}")
}

pub fn result_title(index: usize, kind: &str, source: &str, url: &str) -> String {
    format!("{index}. [{kind} on {source}]({url})")
}

pub const PREVIOUS_PAGE: &str = "Previous";
pub const NEXT_PAGE: &str = "Next";
pub const NOT_YOUR_SEARCH: &str = "Only the user who started the search can change the page.";
pub const SEARCH_EXPIRED: &str = "This search has expired, please start a new one.";
