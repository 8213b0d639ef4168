use super::*;
use serde_json::{json, Value};

/// Tests that requests are authenticated.
///
/// Verifies that the client logs in before the first request and sends both the
/// API key and the bearer token with it.
///
/// Expected: One login, then the request carrying both headers
#[tokio::test]
async fn authenticates_requests() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json("summary/", json!({}))
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let _: Value = client.get("summary/", &[]).await?;

    let requests = test.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].path, "/api/auth/token/");
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[1].path, "/api/summary/");
    assert_eq!(requests[1].api_key.as_deref(), Some("test-api-key"));
    assert_eq!(
        requests[1].authorization,
        Some(format!("Bearer {TEST_TOKEN}"))
    );

    Ok(())
}

/// Tests that the first request completes after logging in.
///
/// Verifies that storing the new access token doesn't wait on the lock held
/// while reading the cached one.
///
/// Expected: The first request finishes well within the timeout
#[tokio::test]
async fn first_request_completes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json("summary/", json!({}))
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        client.get::<Value>("summary/", &[]),
    )
    .await;

    assert!(result.is_ok(), "first request didn't finish");
    result.unwrap()?;
    assert_eq!(test.requests_to("summary/").len(), 1);

    Ok(())
}

/// Tests that the access token is reused.
///
/// Expected: A single login for multiple requests
#[tokio::test]
async fn reuses_access_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_json("summary/", json!({}))
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let _: Value = client.get("summary/", &[]).await?;
    let _: Value = client.get("summary/", &[]).await?;

    assert_eq!(test.requests_to("auth/token/").len(), 1);
    assert_eq!(test.requests_to("summary/").len(), 2);

    Ok(())
}

/// Tests recovering from an expired session.
///
/// Verifies that a 401 response triggers a new login and a single retry of the
/// original request.
///
/// Expected: Ok with the body of the retried request
#[tokio::test]
async fn logs_in_again_on_unauthorized() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .then_respond("summary/", 401, json!({ "detail": "Token expired" }))
        .then_respond("summary/", 200, json!({ "ok": true }))
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let body: Value = client.get("summary/", &[]).await?;

    assert_eq!(body, json!({ "ok": true }));
    assert_eq!(test.requests_to("auth/token/").len(), 2);
    assert_eq!(test.requests_to("summary/").len(), 2);

    Ok(())
}

/// Tests that a 404 response maps to `NotFound`.
///
/// Expected: Err(BlossomError::NotFound)
#[tokio::test]
async fn maps_missing_resources_to_not_found() {
    let test = TestBuilder::new().build().await.unwrap();
    let client = client(&test);

    let result: Result<Value, BlossomError> = client.get("missing/", &[]).await;

    assert!(matches!(result, Err(BlossomError::NotFound { path }) if path == "missing/"));
}

/// Tests that other error statuses are reported with their code.
///
/// Expected: Err(BlossomError::Status) with status 502
#[tokio::test]
async fn reports_error_status() {
    let test = TestBuilder::new()
        .with_status("ping/", 502)
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let result = client.ping().await;

    assert!(matches!(
        result,
        Err(BlossomError::Status { status: 502, .. })
    ));
}

/// Tests that a rejected login is reported as such.
///
/// Expected: Err(BlossomError::Login)
#[tokio::test]
async fn reports_failed_login() {
    let test = TestBuilder::new()
        .with_status("auth/token/", 400)
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let result = client.ping().await;

    assert!(matches!(result, Err(BlossomError::Login(_))));
}
