use super::*;
use oauth2::{ClientId, ClientSecret, TokenUrl};
use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext};

/// Creates a Reddit client whose token and API endpoints point at the mock server.
fn client(test: &TestContext) -> RedditClient {
    let http_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let oauth_client = BasicClient::new(ClientId::new("client-id".to_string()))
        .set_client_secret(ClientSecret::new("client-secret".to_string()))
        .set_token_uri(TokenUrl::new(format!("{}access_token", test.base_url)).unwrap());

    RedditClient::new(http_client, oauth_client, &test.base_url).unwrap()
}

fn token_response() -> serde_json::Value {
    json!({
        "access_token": "reddit-token",
        "token_type": "bearer",
        "expires_in": 86400,
        "scope": "*",
    })
}

/// Tests fetching the rules of a subreddit.
///
/// Verifies that the client obtains a token and sends it with the rules request.
///
/// Expected: Ok with the rules in order
#[tokio::test]
async fn gets_subreddit_rules() {
    let test = TestBuilder::new()
        .with_json("access_token", token_response())
        .with_json(
            "r/CuratedTumblr/about/rules",
            json!({
                "rules": [
                    { "short_name": "Be nice", "description": "No insults." },
                    { "short_name": "No spam" },
                ],
                "site_rules": [],
            }),
        )
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let rules = client.subreddit_rules("CuratedTumblr").await.unwrap();

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].short_name, "Be nice");
    assert_eq!(rules[0].description, "No insults.");
    assert_eq!(rules[1].description, "");

    let request = &test.requests_to("r/CuratedTumblr/about/rules")[0];
    assert_eq!(request.authorization.as_deref(), Some("Bearer reddit-token"));
}

/// Tests that the access token is cached between requests.
///
/// Expected: A single token request for two rules requests
#[tokio::test]
async fn caches_access_token() {
    let test = TestBuilder::new()
        .with_json("access_token", token_response())
        .with_json("r/me_irl/about/rules", json!({ "rules": [] }))
        .build()
        .await
        .unwrap();
    let client = client(&test);

    client.subreddit_rules("me_irl").await.unwrap();
    client.subreddit_rules("me_irl").await.unwrap();

    assert_eq!(test.requests_to("access_token").len(), 1);
    assert_eq!(test.requests_to("r/me_irl/about/rules").len(), 2);
}

/// Tests that unknown subreddits are reported as not found.
///
/// Reddit either answers 404 or redirects to its search page.
///
/// Expected: Err(RedditError::SubredditNotFound) for both
#[tokio::test]
async fn reports_unknown_subreddits() {
    let test = TestBuilder::new()
        .with_json("access_token", token_response())
        .with_status("r/doesnotexist/about/rules", 404)
        .with_status("r/redirected/about/rules", 302)
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let not_found = client.subreddit_rules("doesnotexist").await;
    let redirected = client.subreddit_rules("redirected").await;

    assert!(matches!(not_found, Err(RedditError::SubredditNotFound(name)) if name == "doesnotexist"));
    assert!(matches!(redirected, Err(RedditError::SubredditNotFound(_))));
}

/// Tests that a rejected client credentials grant is reported.
///
/// Expected: Err(RedditError::Token)
#[tokio::test]
async fn reports_token_failure() {
    let test = TestBuilder::new()
        .then_respond("access_token", 401, json!({ "error": "invalid_client" }))
        .build()
        .await
        .unwrap();
    let client = client(&test);

    let result = client.subreddit_rules("me_irl").await;

    assert!(matches!(result, Err(RedditError::Token(_))));
}

/// Tests that names which aren't subreddit names are rejected up front.
///
/// Verifies that names with path segments, query strings or no characters at
/// all never reach Reddit, not even the token endpoint.
///
/// Expected: Err(RedditError::SubredditNotFound) and no requests sent
#[tokio::test]
async fn rejects_invalid_subreddit_names() {
    let test = TestBuilder::new()
        .with_json("access_token", token_response())
        .with_json("api/v1/me", json!({ "name": "bot" }))
        .build()
        .await
        .unwrap();
    let client = client(&test);

    for name in ["../../api/v1/me", "me_irl?foo=bar", "me irl", ""] {
        let result = client.subreddit_rules(name).await;

        assert!(
            matches!(&result, Err(RedditError::SubredditNotFound(rejected)) if rejected == name),
            "{name:?} was not rejected"
        );
    }
    assert!(test.requests().is_empty());
}
