//! Thin client for the Blossom HTTP API.
//!
//! Every request carries the bot's API key in the `X-Api-Key` header and a
//! bearer token obtained by logging in with the bot's email and password. When
//! Blossom answers 401 the token is assumed to have expired: the client logs in
//! again and retries the request once.
//!
//! The repositories in the sub-modules wrap the endpoints the bot uses and
//! deserialize their responses into domain models.

pub mod submission;
pub mod transcription;
pub mod volunteer;

#[cfg(test)]
mod test;

use reqwest::{Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

use crate::error::blossom::BlossomError;

pub use submission::SubmissionRepository;
pub use transcription::TranscriptionRepository;
pub use volunteer::VolunteerRepository;

/// Query parameters of a Blossom request.
pub type Query = [(&'static str, String)];

const API_KEY_HEADER: &str = "X-Api-Key";
const LOGIN_PATH: &str = "auth/token/";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    access: String,
}

struct Credentials {
    email: String,
    password: String,
    api_key: String,
}

/// Shared Blossom client.
///
/// Cheap to clone; clones share the HTTP connection pool and the access token.
#[derive(Clone)]
pub struct BlossomClient {
    http_client: reqwest::Client,
    base_url: Url,
    credentials: Arc<Credentials>,
    token: Arc<RwLock<Option<String>>>,
}

impl BlossomClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// No request is made until the first call; the login happens lazily.
    ///
    /// # Arguments
    /// - `http_client` - Shared reqwest client
    /// - `base_url` - API root, e.g. `https://grafeas.org/api/`
    /// - `email` / `password` - Credentials of the bot's Blossom account
    /// - `api_key` - API key of the bot's Blossom account
    ///
    /// # Returns
    /// - `Ok(BlossomClient)` - Client ready for requests
    /// - `Err(BlossomError::Url)` - `base_url` is not a valid URL
    pub fn new(
        http_client: reqwest::Client,
        base_url: &str,
        email: &str,
        password: &str,
        api_key: &str,
    ) -> Result<Self, BlossomError> {
        // Paths are joined relative to the base, which only works with a trailing slash
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        Ok(Self {
            http_client,
            base_url,
            credentials: Arc::new(Credentials {
                email: email.to_string(),
                password: password.to_string(),
                api_key: api_key.to_string(),
            }),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Sends a GET request and deserializes the JSON response.
    ///
    /// # Returns
    /// - `Ok(T)` - The deserialized response body
    /// - `Err(BlossomError::NotFound)` - Blossom answered 404
    /// - `Err(BlossomError::Status)` - Blossom answered with another non-2xx status
    /// - `Err(BlossomError::Request)` - Transport failure or unexpected body
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T, BlossomError> {
        let response = self.send(Method::GET, path, query).await?;
        let response = check_status(path, response)?;

        Ok(response.json::<T>().await?)
    }

    /// Checks that Blossom is reachable via its `ping/` endpoint.
    pub async fn ping(&self) -> Result<(), BlossomError> {
        let response = self.send(Method::GET, "ping/", &[]).await?;
        check_status("ping/", response)?;

        Ok(())
    }

    async fn send(&self, method: Method, path: &str, query: &Query) -> Result<Response, BlossomError> {
        let url = self.base_url.join(path)?;

        let cached = self.token.read().await.clone();
        let token = match cached {
            Some(token) => token,
            None => self.login().await?,
        };

        tracing::debug!(%method, path, "Blossom request");
        let response = self
            .request(method.clone(), url.clone(), query, &token)
            .send()
            .await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        tracing::info!(path, "Blossom session expired, logging in again");
        let token = self.login().await?;

        Ok(self.request(method, url, query, &token).send().await?)
    }

    fn request(&self, method: Method, url: Url, query: &Query, token: &str) -> reqwest::RequestBuilder {
        self.http_client
            .request(method, url)
            .header(API_KEY_HEADER, &self.credentials.api_key)
            .bearer_auth(token)
            .query(query)
    }

    /// Exchanges the bot's credentials for a new access token and stores it.
    async fn login(&self) -> Result<String, BlossomError> {
        let url = self.base_url.join(LOGIN_PATH)?;

        let response = self
            .http_client
            .post(url)
            .header(API_KEY_HEADER, &self.credentials.api_key)
            .json(&LoginRequest {
                email: &self.credentials.email,
                password: &self.credentials.password,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BlossomError::Login(format!(
                "status {}",
                response.status().as_u16()
            )));
        }

        let access = response.json::<LoginResponse>().await?.access;
        *self.token.write().await = Some(access.clone());

        Ok(access)
    }
}

fn check_status(path: &str, response: Response) -> Result<Response, BlossomError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(BlossomError::NotFound {
            path: path.to_string(),
        });
    }

    if !status.is_success() {
        return Err(BlossomError::Status {
            path: path.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}
