mod client;
mod submission;
mod volunteer;

use super::*;
use crate::error::AppError;
use test_utils::{
    builder::{TestBuilder, TEST_TOKEN},
    context::TestContext,
    factory,
};

/// Creates a Blossom client pointed at the mock server.
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
