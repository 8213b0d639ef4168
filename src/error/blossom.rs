use thiserror::Error;

/// Failures talking to the Blossom API.
#[derive(Error, Debug)]
pub enum BlossomError {
    /// Transport or body decoding failure from reqwest.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The configured base URL cannot be joined with a request path.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// Blossom answered 404 for the requested resource.
    #[error("Blossom resource not found: {path}")]
    NotFound {
        /// Request path relative to the API base URL
        path: String,
    },

    /// Blossom answered with an unexpected status code.
    #[error("Blossom request to {path} failed with status {status}")]
    Status {
        /// Request path relative to the API base URL
        path: String,
        /// HTTP status code returned by Blossom
        status: u16,
    },

    /// Exchanging the bot credentials for an access token failed.
    #[error("Failed to log in to Blossom: {0}")]
    Login(String),
}
