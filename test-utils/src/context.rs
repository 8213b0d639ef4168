use axum::{
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

use crate::{builder::API_PREFIX, error::TestError};

/// A canned response of the mock server.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Value,
}

/// A request received by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Absolute path, e.g. `/api/volunteer/`.
    pub path: String,
    /// Decoded query parameters.
    pub query: HashMap<String, String>,
    /// Value of the `Authorization` header, if sent.
    pub authorization: Option<String>,
    /// Value of the `X-Api-Key` header, if sent.
    pub api_key: Option<String>,
}

impl RecordedRequest {
    /// Gets a query parameter of the request.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<Mutex<HashMap<String, Vec<MockResponse>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Test context containing a running mock of the Blossom API.
///
/// The server runs on a background task for the lifetime of the tokio runtime
/// of the test. Unknown paths are answered with 404.
pub struct TestContext {
    /// API root of the mock, e.g. `http://127.0.0.1:34567/api/`.
    pub base_url: String,

    state: MockState,
}

impl TestContext {
    /// Binds the mock server to `127.0.0.1:0` and starts serving.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `responses` - Canned responses per absolute path
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running mock server
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn start(responses: HashMap<String, Vec<MockResponse>>) -> Result<Self, TestError> {
        let state = MockState {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        };

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let router = Router::new()
            .fallback(handle_request)
            .with_state(state.clone());

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            base_url: format!("http://{addr}{API_PREFIX}"),
            state,
        })
    }

    /// Gets all requests received so far, in order, including logins.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Gets the requests received for the path relative to the API root.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        let full_path = format!("{API_PREFIX}{}", path.trim_start_matches('/'));
        self.requests()
            .into_iter()
            .filter(|request| request.path == full_path)
            .collect()
    }
}

async fn handle_request(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    if let Ok(mut requests) = state.requests.lock() {
        requests.push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query,
            authorization: header("authorization"),
            api_key: header("x-api-key"),
        });
    }

    let response = state.responses.lock().ok().and_then(|mut responses| {
        let queue = responses.get_mut(uri.path())?;
        if queue.len() > 1 {
            Some(queue.remove(0))
        } else {
            queue.first().cloned()
        }
    });

    match response {
        Some(MockResponse { status, body }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(body)).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response(),
    }
}
