use super::*;
use crate::data::blossom::submission::QUEUE_PAGE_SIZE;
use chrono::{TimeZone, Utc};
use serde_json::json;
use test_utils::factory::SubmissionFactory;

/// Tests finding a submission by its partner URL.
#[tokio::test]
async fn finds_submission_by_url() -> Result<(), AppError> {
    let url = "https://reddit.com/r/CuratedTumblr/comments/abc/title/";
    let test = TestBuilder::new()
        .with_json(
            "submission/",
            factory::page(vec![SubmissionFactory::new(7).url(url).completed_by(3).build()]),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let submission = SubmissionRepository::new(&client)
        .find_one(&[("url", url.to_string())])
        .await?
        .unwrap();

    assert_eq!(submission.id, 7);
    assert_eq!(submission.subreddit(), Some("CuratedTumblr"));
    assert_eq!(
        submission.completed_by.as_deref(),
        Some("https://grafeas.org/api/volunteer/3/")
    );
    assert_eq!(test.requests_to("submission/")[0].param("url"), Some(url));

    Ok(())
}

/// Tests fetching the queue across pages.
///
/// Verifies that a full page triggers a request for the next page and that
/// paging stops at the first short page.
///
/// Expected: Ok with all submissions of both pages
#[tokio::test]
async fn pages_through_unclaimed_submissions() -> Result<(), AppError> {
    let full_page: Vec<_> = (1..=QUEUE_PAGE_SIZE as u64)
        .map(|id| factory::create_submission(id, "CuratedTumblr"))
        .collect();
    let short_page = vec![
        factory::create_submission(1001, "me_irl"),
        factory::create_submission(1002, "me_irl"),
    ];
    let test = TestBuilder::new()
        .then_respond("submission/", 200, factory::page(full_page))
        .then_respond("submission/", 200, factory::page(short_page))
        .build()
        .await
        .unwrap();
    let client = client(&test);
    let since = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();

    let submissions = SubmissionRepository::new(&client)
        .unclaimed_since(since)
        .await?;

    assert_eq!(submissions.len(), QUEUE_PAGE_SIZE + 2);

    let requests = test.requests_to("submission/");
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].param("claimed_by__isnull"), Some("true"));
    assert_eq!(requests[0].param("completed_by__isnull"), Some("true"));
    assert_eq!(requests[0].param("archived"), Some("false"));
    assert_eq!(requests[1].param("page"), Some("2"));

    Ok(())
}

/// Tests fetching the leaderboard around a volunteer.
#[tokio::test]
async fn gets_leaderboard() -> Result<(), AppError> {
    let entry = |rank: u64, username: &str, gamma: u64| {
        json!({ "id": rank, "username": username, "gamma": gamma, "rank": rank })
    };
    let test = TestBuilder::new()
        .with_json(
            "submission/leaderboard",
            json!({
                "top": [entry(1, "first", 5000)],
                "above": [entry(9, "above", 120)],
                "user": entry(10, "user", 110),
                "below": [],
            }),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let leaderboard = SubmissionRepository::new(&client)
        .leaderboard(10, 5, 5, 5)
        .await?;

    assert_eq!(leaderboard.top[0].username, "first");
    assert_eq!(leaderboard.above[0].rank, 9);
    assert_eq!(leaderboard.user.gamma, 110);
    assert!(leaderboard.below.is_empty());
    assert_eq!(
        test.requests_to("submission/leaderboard")[0].param("user_id"),
        Some("10")
    );

    Ok(())
}

/// Tests counting completed submissions using the page count.
///
/// Expected: Ok with the total count, not the page length
#[tokio::test]
async fn counts_completed_submissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            "submission/",
            factory::page_with_next(vec![SubmissionFactory::new(1).completed_by(3).build()], 37),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);
    let since = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();

    let count = SubmissionRepository::new(&client)
        .completed_count_since(3, since)
        .await?;

    assert_eq!(count, 37);
    assert_eq!(test.requests_to("submission/")[0].param("page_size"), Some("1"));

    Ok(())
}
