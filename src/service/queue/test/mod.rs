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

fn tracked(message_id: u64) -> TrackedMessage {
    TrackedMessage {
        channel_id: ChannelId::new(1),
        message_id: MessageId::new(message_id),
        source: None,
    }
}

/// Tests refreshing the queue.
///
/// Verifies that submissions of the last 18 hours are requested and their
/// sources are reduced to subreddits.
///
/// Expected: The snapshot is cached with one item per submission
#[tokio::test]
async fn refresh_caches_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            "submission/",
            factory::page(vec![
                factory::create_submission(1, "CuratedTumblr"),
                factory::SubmissionFactory::new(2).source("blossom").build(),
            ]),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);
    let cache = QueueCache::new();
    let now = Utc::now();

    QueueService::new(&client, &cache).refresh(now).await?;

    let snapshot = cache.snapshot().await.unwrap();
    let sources: Vec<&str> = snapshot.items.iter().map(|item| item.source.as_str()).collect();
    assert_eq!(sources, vec!["r/CuratedTumblr", "blossom"]);
    assert_eq!(snapshot.updated_at, now);

    let request = &test.requests_to("submission/")[0];
    let since = (now - Duration::hours(QUEUE_WINDOW_HOURS)).to_rfc3339();
    assert_eq!(request.param("create_time__gte"), Some(since.as_str()));

    Ok(())
}

/// Tests that a failed refresh keeps the previous snapshot.
#[tokio::test]
async fn failed_refresh_keeps_snapshot() {
    let test = TestBuilder::new()
        .with_status("submission/", 500)
        .build()
        .await
        .unwrap();
    let client = client(&test);
    let cache = QueueCache::new();
    cache
        .set_snapshot(QueueSnapshot {
            items: Vec::new(),
            updated_at: Utc::now(),
        })
        .await;

    let result = QueueService::new(&client, &cache).refresh(Utc::now()).await;

    assert!(result.is_err());
    assert!(cache.snapshot().await.is_some());
}

/// Tests the limit of tracked messages.
///
/// Expected: The oldest message is dropped once a sixth one is tracked
#[tokio::test]
async fn tracks_latest_messages() {
    let cache = QueueCache::new();

    for id in 1..=6 {
        cache.track(tracked(id)).await;
    }

    let ids: Vec<u64> = cache
        .tracked()
        .await
        .iter()
        .map(|message| message.message_id.get())
        .collect();
    assert_eq!(ids, vec![2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn untracks_message() {
    let cache = QueueCache::new();
    cache.track(tracked(1)).await;
    cache.track(tracked(2)).await;

    cache.untrack(MessageId::new(1)).await;

    assert_eq!(cache.tracked().await, vec![tracked(2)]);
}
