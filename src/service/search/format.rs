//! Rendering of search results as a Discord embed.

use regex::Regex;
use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
};
use std::sync::LazyLock;

use super::{SearchPage, NEXT_BUTTON_ID, PREVIOUS_BUTTON_ID};
use crate::{
    model::transcription::Transcription,
    strings::search,
    util::format::limit_str,
};

/// Matches the header of a transcription, e.g. `*Image Transcription: Tumblr*`.
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*\*(?P<format>\w+) Transcription:?\s*(?P<kind>[^*]*)\*")
        .expect("header regex is valid")
});

/// Maximum length of an embed description.
const DESCRIPTION_LIMIT: usize = 4096;
/// Matching lines shown per result.
const MAX_LINES_PER_RESULT: usize = 3;

/// Determines the kind of transcription from its header.
///
/// # Returns
/// - The kind named after the colon (`GIF`, `Tumblr`, ...), else the format
///   (`Image`, `Video`, ...), else `Post` for transcriptions without header
pub fn get_transcription_type(text: &str) -> String {
    let Some(caps) = HEADER_REGEX.captures(text) else {
        return "Post".to_string();
    };

    let kind = caps["kind"].trim();
    if kind.is_empty() {
        caps["format"].to_string()
    } else {
        kind.to_string()
    }
}

/// Extracts the subreddit the transcription was posted on, as `r/<sub>`.
pub fn get_transcription_source(url: &str) -> Option<String> {
    url.split('/')
        .nth(4)
        .filter(|sub| !sub.is_empty())
        .map(|sub| format!("r/{sub}"))
}

/// Lists the lines of the text containing the query, each followed by a line
/// underlining the first occurrence with `-`.
pub fn highlight_matches(text: &str, query: &str) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let underline = "-".repeat(query.chars().count());

    text.lines()
        .filter_map(|line| {
            let line_lower = line.to_lowercase();
            let pos = line_lower.find(&query_lower)?;
            let indent = line_lower[..pos].chars().count();
            Some(format!("{line}\n{}{underline}", " ".repeat(indent)))
        })
        .take(MAX_LINES_PER_RESULT)
        .collect()
}

/// Formats the results of a page, numbered from the page offset.
fn format_results(query: &str, results: &[Transcription], offset: usize) -> String {
    let mut description = String::new();

    for (i, tr) in results.iter().enumerate() {
        let url = tr.url.as_deref().unwrap_or_default();
        let kind = get_transcription_type(tr.text());
        let source = get_transcription_source(url).unwrap_or_else(|| "Reddit".to_string());

        description.push_str(&search::result_title(offset + i + 1, &kind, &source, url));
        description.push_str("\n```\n");
        for highlighted in highlight_matches(tr.text(), query) {
            description.push_str(&highlighted);
            description.push('\n');
        }
        description.push_str("```\n");
    }

    limit_str(&description, DESCRIPTION_LIMIT)
}

/// Builds the embed showing a page of results.
pub fn search_embed(query: &str, page: &SearchPage) -> CreateEmbed {
    CreateEmbed::new()
        .title(search::embed_title(query))
        .description(format_results(query, &page.results, page.offset()))
        .footer(CreateEmbedFooter::new(search::page_footer(
            page.page + 1,
            page.page_count,
        )))
}

/// Builds the previous/next buttons, disabled at the first and last page.
pub fn search_buttons(page: &SearchPage) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(PREVIOUS_BUTTON_ID)
            .label(search::PREVIOUS_PAGE)
            .style(ButtonStyle::Secondary)
            .disabled(!page.has_previous()),
        CreateButton::new(NEXT_BUTTON_ID)
            .label(search::NEXT_PAGE)
            .style(ButtonStyle::Secondary)
            .disabled(!page.has_next()),
    ])]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_header(header: &str) -> String {
        format!("{header}\n\n---\n\nBla bla bla\n\n---\n\nFooter")
    }

    #[test]
    fn transcription_types() {
        let cases = [
            ("*Image Transcription:*", "Image"),
            ("*Image Transcription*", "Image"),
            ("*Image Transcription: GIF*", "GIF"),
            ("*Image Transcription: Tumblr*", "Tumblr"),
            ("*Video Transcription:*", "Video"),
            ("aspdpiaosfipasof", "Post"),
        ];

        for (header, expected) in cases {
            assert_eq!(get_transcription_type(&with_header(header)), expected, "{header}");
        }
    }

    #[test]
    fn transcription_sources() {
        assert_eq!(
            get_transcription_source(
                "https://reddit.com/r/thatHappened/comments/qzhtyb/the_more_you_read/hlmkuau/"
            )
            .as_deref(),
            Some("r/thatHappened")
        );
        assert_eq!(
            get_transcription_source(
                "https://reddit.com/r/CasualUK/comments/qzhsco/found_this_bag/hlmjpoa/"
            )
            .as_deref(),
            Some("r/CasualUK")
        );
        assert_eq!(get_transcription_source("https://reddit.com/"), None);
    }

    /// Tests underlining the occurrence of the query.
    ///
    /// Verifies that the match is case-insensitive and that only matching lines
    /// are listed.
    #[test]
    fn underlines_occurrences() {
        let text = "first line\nThe Quick fox\nnothing here\nquick again";

        let lines = highlight_matches(text, "quick");

        assert_eq!(lines, vec!["The Quick fox\n    -----", "quick again\n-----"]);
    }

    #[test]
    fn limits_matching_lines() {
        let text = "a\na\na\na\na";

        assert_eq!(highlight_matches(text, "a").len(), MAX_LINES_PER_RESULT);
    }
}
