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

/// Creates `count` matching transcriptions starting at the ID.
fn transcriptions(first_id: u64, count: u64) -> Vec<serde_json::Value> {
    (first_id..first_id + count)
        .map(|id| factory::create_transcription(id, id, 5, "the quick fox"))
        .collect()
}

#[test]
fn page_math() {
    assert_eq!(page_count(0), 0);
    assert_eq!(page_count(5), 1);
    assert_eq!(page_count(6), 2);
    assert_eq!(request_page_for(0), 1);
    assert_eq!(request_page_for(11), 1);
    assert_eq!(request_page_for(12), 2);
}

/// Tests loading the first page of a search.
///
/// Verifies that the search requests sixty posted transcriptions, newest first.
///
/// Expected: The first five results and the total page count
#[tokio::test]
async fn loads_first_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            "transcription/",
            factory::page_with_next(transcriptions(1, 60), 123),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);
    let mut state = SearchState::new("quick", 42);

    let page = SearchService::new(&client).load_page(&mut state).await?;

    assert_eq!(page.results.len(), RESULTS_PER_PAGE);
    assert_eq!(page.results[0].id, 1);
    assert_eq!(page.total, 123);
    assert_eq!(page.page_count, 25);
    assert!(!page.has_previous());
    assert!(page.has_next());

    let request = &test.requests_to("transcription/")[0];
    assert_eq!(request.param("text__icontains"), Some("quick"));
    assert_eq!(request.param("url__isnull"), Some("false"));
    assert_eq!(request.param("ordering"), Some("-create_time"));
    assert_eq!(request.param("page_size"), Some("60"));
    assert_eq!(request.param("page"), Some("1"));

    Ok(())
}

/// Tests paging within the cached response.
///
/// Expected: The second page is served without another request
#[tokio::test]
async fn pages_within_cached_response() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            "transcription/",
            factory::page_with_next(transcriptions(1, 60), 123),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);
    let service = SearchService::new(&client);
    let mut state = SearchState::new("quick", 42);

    service.load_page(&mut state).await?;
    state.cur_page = 1;
    let page = service.load_page(&mut state).await?;

    assert_eq!(page.results[0].id, 6);
    assert_eq!(page.offset(), 5);
    assert_eq!(test.requests_to("transcription/").len(), 1);

    Ok(())
}

/// Tests paging past the cached response.
///
/// Expected: The next Blossom page is requested and its first results are shown
#[tokio::test]
async fn requests_next_blossom_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .then_respond(
            "transcription/",
            200,
            factory::page_with_next(transcriptions(1, 60), 63),
        )
        .then_respond(
            "transcription/",
            200,
            factory::page_with_next(transcriptions(61, 3), 63),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);
    let service = SearchService::new(&client);
    let mut state = SearchState::new("quick", 42);

    service.load_page(&mut state).await?;
    state.cur_page = 12;
    let page = service.load_page(&mut state).await?;

    assert_eq!(page.results.len(), 3);
    assert_eq!(page.results[0].id, 61);
    assert!(!page.has_next());
    assert_eq!(state.request_page, 2);
    assert_eq!(test.requests_to("transcription/")[1].param("page"), Some("2"));

    Ok(())
}

/// Tests a search without results.
///
/// Expected: An empty page without pages to show
#[tokio::test]
async fn search_without_results() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json("transcription/", factory::page(vec![]))
        .build()
        .await
        .unwrap();
    let client = client(&test);
    let mut state = SearchState::new("nothing", 42);

    let page = SearchService::new(&client).load_page(&mut state).await?;

    assert!(page.results.is_empty());
    assert_eq!(page.page_count, 0);

    Ok(())
}
