mod embed;

use super::*;
use crate::error::AppError;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

fn client(test: &TestContext) -> BlossomClient {
    BlossomClient::new(
        reqwest::Client::new(),
        &test.base_url,
        "bot@example.com",
        "hunter2",
        "test-api-key",
    )
    .unwrap()
}

/// Tests classifying Reddit links.
#[test]
fn classifies_reddit_links() {
    let cases = [
        (
            "https://www.reddit.com/r/TranscribersOfReddit/comments/abc/curatedtumblr_image/",
            Some(RedditLink::TorPost(
                "https://reddit.com/r/TranscribersOfReddit/comments/abc/curatedtumblr_image/".to_string(),
            )),
        ),
        (
            "https://old.reddit.com/r/CuratedTumblr/comments/abc/title",
            Some(RedditLink::PartnerPost(
                "https://reddit.com/r/CuratedTumblr/comments/abc/title/".to_string(),
            )),
        ),
        (
            "https://reddit.com/r/CuratedTumblr/comments/abc/title/def/?context=3",
            Some(RedditLink::Transcription(
                "https://reddit.com/r/CuratedTumblr/comments/abc/title/def/".to_string(),
            )),
        ),
        ("https://example.com/r/CuratedTumblr/comments/abc/title/", None),
        ("not a url", None),
    ];

    for (input, expected) in cases {
        assert_eq!(parse_reddit_link(input), expected, "{input}");
    }
}
