use thiserror::Error;

/// Failures talking to the Reddit API.
#[derive(Error, Debug)]
pub enum RedditError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The client credentials grant was rejected or could not be completed.
    #[error("Failed to obtain Reddit access token: {0}")]
    Token(String),

    /// Reddit redirected to its search page or answered 404.
    ///
    /// Reddit does either for subreddits that don't exist or names containing
    /// characters that aren't allowed.
    #[error("Subreddit r/{0} not found")]
    SubredditNotFound(String),

    #[error("Reddit request failed with status {0}")]
    Status(u16),
}
