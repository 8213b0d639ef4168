use oauth2::{basic::BasicClient, ClientId, ClientSecret, TokenUrl};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::Config,
    data::{
        blossom::BlossomClient,
        reddit::{RedditClient, RedditOAuthClient, REDDIT_API_URL, REDDIT_TOKEN_URL},
    },
    error::{config::ConfigError, AppError},
    service::chart,
};

const DEFAULT_LOG_FILTER: &str = "info,serenity=warn,tracing::span=warn";

/// Installs the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG`, falling back to info level with the
/// chatty serenity internals reduced to warnings.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Builds the HTTP client shared by the Blossom and Reddit clients.
///
/// Redirects are not followed: Reddit answers requests for unknown subreddits
/// with a redirect to its search page, which has to be detected as such.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client identifying itself with the configured user agent
/// - `Err(AppError)` - The TLS backend couldn't be initialized
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(&config.reddit_user_agent)
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {e}")))
}

/// Builds the OAuth2 client for Reddit's client credentials grant.
///
/// # Returns
/// - `Ok(RedditOAuthClient)` - Client with Reddit's token endpoint
/// - `Err(AppError::ConfigErr)` - The token URL is invalid
pub fn setup_reddit_oauth_client(config: &Config) -> Result<RedditOAuthClient, AppError> {
    let token_url = TokenUrl::new(REDDIT_TOKEN_URL.to_string()).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "REDDIT_TOKEN_URL".to_string(),
            value: REDDIT_TOKEN_URL.to_string(),
        }
    })?;

    Ok(BasicClient::new(ClientId::new(config.reddit_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.reddit_client_secret.clone()))
        .set_token_uri(token_url))
}

/// Creates the Blossom client from the configured credentials.
pub fn setup_blossom_client(config: &Config, http_client: reqwest::Client) -> Result<BlossomClient, AppError> {
    let client = BlossomClient::new(
        http_client,
        &config.blossom_api_url,
        &config.blossom_email,
        &config.blossom_password,
        &config.blossom_api_key,
    )
    .map_err(|_| ConfigError::InvalidEnvVar {
        name: "BLOSSOM_API_URL".to_string(),
        value: config.blossom_api_url.clone(),
    })?;

    Ok(client)
}

/// Creates the Reddit client for the public OAuth API.
pub fn setup_reddit_client(
    http_client: reqwest::Client,
    oauth_client: RedditOAuthClient,
) -> Result<RedditClient, AppError> {
    RedditClient::new(http_client, oauth_client, REDDIT_API_URL)
        .map_err(|e| AppError::InternalError(format!("Invalid Reddit API URL: {e}")))
}

/// Registers the chart font, logging instead of failing when it is missing.
///
/// Without a font the chart commands fall back to text replies.
pub fn register_chart_font(config: &Config) {
    if let Err(e) = chart::register_chart_font(&config.chart_font_path) {
        tracing::warn!("Charts are unavailable: {}", e);
    }
}
