//! Thin client for the parts of the Reddit API the bot uses.
//!
//! Authenticates as a script application with the OAuth2 client credentials
//! grant. The access token is cached until shortly before it expires.

#[cfg(test)]
mod test;

use oauth2::{
    basic::BasicClient, EndpointNotSet, EndpointSet, TokenResponse,
};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;
use url::Url;

use crate::{
    error::reddit::RedditError,
    model::rules::{SubredditRule, SubredditRules},
};

pub const REDDIT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
pub const REDDIT_API_URL: &str = "https://oauth.reddit.com/";

/// Tokens are refreshed this long before Reddit considers them expired.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);
/// Lifetime assumed when Reddit doesn't state one.
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);

/// OAuth2 client configured with Reddit's token endpoint only.
pub type RedditOAuthClient =
    BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

#[derive(Clone)]
struct CachedToken {
    secret: String,
    expires_at: Instant,
}

/// Shared Reddit client.
///
/// Cheap to clone; clones share the HTTP connection pool and the cached token.
#[derive(Clone)]
pub struct RedditClient {
    /// Must not follow redirects: Reddit redirects requests for unknown subreddits.
    http_client: reqwest::Client,
    oauth_client: RedditOAuthClient,
    api_url: Url,
    token: Arc<RwLock<Option<CachedToken>>>,
}

impl RedditClient {
    /// Creates a client for the API at `api_url`, normally [`REDDIT_API_URL`].
    ///
    /// # Returns
    /// - `Ok(RedditClient)` - Client ready for requests
    /// - `Err(url::ParseError)` - `api_url` is not a valid URL
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: RedditOAuthClient,
        api_url: &str,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            http_client,
            oauth_client,
            api_url: Url::parse(api_url)?,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Gets the rules of the subreddit, in the order the moderators set.
    ///
    /// # Arguments
    /// - `name` - Subreddit name without `r/` prefix
    ///
    /// # Returns
    /// - `Ok(Vec<SubredditRule>)` - The rules, possibly empty
    /// - `Err(RedditError::SubredditNotFound)` - Reddit redirected or answered 404
    /// - `Err(RedditError::Token)` - Authentication failed
    /// - `Err(RedditError::Status)` - Reddit answered with another error status
    pub async fn subreddit_rules(&self, name: &str) -> Result<Vec<SubredditRule>, RedditError> {
        if !is_valid_sub_name(name) {
            return Err(RedditError::SubredditNotFound(name.to_string()));
        }

        let url = self
            .api_url
            .join(&format!("r/{name}/about/rules"))
            .map_err(|_| RedditError::SubredditNotFound(name.to_string()))?;
        let token = self.access_token().await?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(token)
            .query(&[("raw_json", "1")])
            .send()
            .await?;

        let status = response.status();
        if status.is_redirection() || status == reqwest::StatusCode::NOT_FOUND {
            return Err(RedditError::SubredditNotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(RedditError::Status(status.as_u16()));
        }

        Ok(response.json::<SubredditRules>().await?.rules)
    }

    /// Gets a valid access token, requesting a new one when the cached one expired.
    async fn access_token(&self) -> Result<String, RedditError> {
        let cached = self.token.read().await.clone();
        if let Some(token) = cached {
            if token.expires_at > Instant::now() + TOKEN_EXPIRY_MARGIN {
                return Ok(token.secret);
            }
        }

        let response = self
            .oauth_client
            .exchange_client_credentials()
            .request_async(&self.http_client)
            .await
            .map_err(|e| RedditError::Token(e.to_string()))?;

        let secret = response.access_token().secret().clone();
        let lifetime = response.expires_in().unwrap_or(DEFAULT_TOKEN_LIFETIME);
        tracing::debug!(lifetime_secs = lifetime.as_secs(), "Obtained Reddit access token");

        *self.token.write().await = Some(CachedToken {
            secret: secret.clone(),
            expires_at: Instant::now() + lifetime,
        });

        Ok(secret)
    }
}

/// Subreddit names only consist of letters, digits and underscores.
fn is_valid_sub_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
