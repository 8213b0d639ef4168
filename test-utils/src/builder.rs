use serde_json::{json, Value};
use std::collections::HashMap;

use crate::{
    context::{MockResponse, TestContext},
    error::TestError,
};

/// Path prefix of the mock API, mirroring `https://grafeas.org/api/`.
pub const API_PREFIX: &str = "/api/";

/// Access token handed out by the mock login endpoint.
pub const TEST_TOKEN: &str = "test-token";

/// Builder for creating test contexts with a mock Blossom API.
///
/// Responses are registered per path relative to the API root. The login endpoint
/// `auth/token/` answers with [`TEST_TOKEN`] unless overridden.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_json("summary/", json!({ "volunteer_count": 10 }))
///     .with_status("ping/", 503)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Responses per absolute request path, served in order.
    ///
    /// The last response of each path is repeated once the others are used up.
    responses: HashMap<String, Vec<MockResponse>>,
}

impl TestBuilder {
    /// Creates a new test builder serving only the login endpoint.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
        .with_json("auth/token/", json!({ "access": TEST_TOKEN }))
    }

    /// Replaces the responses for the path with a single `200 OK` JSON response.
    ///
    /// # Arguments
    /// - `path` - Path relative to the API root, e.g. `volunteer/`
    /// - `body` - JSON body to answer with
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_json(mut self, path: &str, body: Value) -> Self {
        self.responses
            .insert(full_path(path), vec![MockResponse { status: 200, body }]);
        self
    }

    /// Replaces the responses for the path with a single empty response of the status.
    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.responses.insert(
            full_path(path),
            vec![MockResponse {
                status,
                body: json!({}),
            }],
        );
        self
    }

    /// Appends a response to the sequence served for the path.
    ///
    /// Use this to simulate state changes between requests, e.g. an expired
    /// session answered with 401 followed by a successful retry.
    ///
    /// # Arguments
    /// - `path` - Path relative to the API root
    /// - `status` - HTTP status code of the response
    /// - `body` - JSON body of the response
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn then_respond(mut self, path: &str, status: u16, body: Value) -> Self {
        self.responses
            .entry(full_path(path))
            .or_default()
            .push(MockResponse { status, body });
        self
    }

    /// Starts the mock server on an ephemeral local port.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running mock server
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::start(self.responses).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn full_path(path: &str) -> String {
    format!("{API_PREFIX}{}", path.trim_start_matches('/'))
}
