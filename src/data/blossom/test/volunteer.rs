use super::*;
use crate::model::heatmap::HeatmapEntry;
use chrono::{TimeZone, Utc};
use serde_json::json;
use test_utils::factory::VolunteerFactory;

/// Tests finding a volunteer by username.
///
/// Expected: Ok(Some) with the volunteer's fields and the username as filter
#[tokio::test]
async fn finds_volunteer_by_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            "volunteer/",
            factory::page(vec![VolunteerFactory::new(42, "user").gamma(1234).build()]),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let volunteer = VolunteerRepository::new(&client)
        .find_by_username("user")
        .await?
        .unwrap();

    assert_eq!(volunteer.id, 42);
    assert_eq!(volunteer.username, "user");
    assert_eq!(volunteer.gamma, 1234);
    assert_eq!(
        volunteer.date_joined,
        Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(test.requests_to("volunteer/")[0].param("username"), Some("user"));

    Ok(())
}

/// Tests looking up a username that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json("volunteer/", factory::page(vec![]))
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let volunteer = VolunteerRepository::new(&client)
        .find_by_username("nobody")
        .await?;

    assert!(volunteer.is_none());

    Ok(())
}

/// Tests fetching the community summary.
#[tokio::test]
async fn gets_summary() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            "summary/",
            json!({
                "volunteer_count": 5000,
                "transcription_count": 250000,
                "days_since_inception": 1500,
            }),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let summary = VolunteerRepository::new(&client).summary().await?;

    assert_eq!(summary.volunteer_count, 5000);
    assert_eq!(summary.transcription_count, 250000);
    assert_eq!(summary.days_since_inception, 1500);

    Ok(())
}

/// Tests fetching the activity heatmap.
#[tokio::test]
async fn gets_heatmap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json(
            "volunteer/heatmap/",
            json!([
                { "day": 1, "hour": 0, "count": 3 },
                { "day": 7, "hour": 23, "count": 1 },
            ]),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let heatmap = VolunteerRepository::new(&client).heatmap(42).await?;

    assert_eq!(
        heatmap,
        vec![
            HeatmapEntry { day: 1, hour: 0, count: 3 },
            HeatmapEntry { day: 7, hour: 23, count: 1 },
        ]
    );
    assert_eq!(test.requests_to("volunteer/heatmap/")[0].param("id"), Some("42"));

    Ok(())
}

/// Tests collecting the rate over multiple pages.
///
/// Verifies that the repository follows `next` links and passes the time range.
///
/// Expected: Ok with the entries of both pages in order
#[tokio::test]
async fn collects_rate_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .then_respond(
            "submission/rate/",
            200,
            factory::page_with_next(
                vec![json!({ "date": "2021-06-01T00:00:00Z", "count": 4 })],
                2,
            ),
        )
        .then_respond(
            "submission/rate/",
            200,
            factory::page(vec![json!({ "date": "2021-06-02T00:00:00Z", "count": 6 })]),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);
    let after = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();

    let rate = VolunteerRepository::new(&client)
        .rate(42, Some(after), None)
        .await?;

    assert_eq!(rate.iter().map(|entry| entry.count).collect::<Vec<_>>(), vec![4, 6]);

    let requests = test.requests_to("submission/rate/");
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].param("completed_by"), Some("42"));
    assert_eq!(requests[0].param("page"), Some("1"));
    assert_eq!(requests[1].param("page"), Some("2"));
    assert_eq!(
        requests[0].param("complete_time__gte"),
        Some(after.to_rfc3339().as_str())
    );
    assert_eq!(requests[0].param("complete_time__lte"), None);

    Ok(())
}
