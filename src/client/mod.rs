//! The CourtListener API client.
//!
//! One lazily-built, authenticated HTTP session is shared by every
//! operation. The operations themselves live in submodules: [`search`]
//! for full-text search and citation lookup, [`opinions`] for opinion
//! text and PDFs, and [`courts`] for court resolution and the roster.

mod courts;
mod opinions;
mod search;

pub use courts::{resolve_court, COURT_SHORTCUTS};
pub use search::SearchOptions;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::{get_config, ApiConfig, TOKEN_ENV};

/// Errors that can occur when talking to CourtListener
#[derive(Error, Debug)]
pub enum ClientError {
    /// The client is not usable as configured (usually a missing token)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network-level failure (connection, timeout, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("API error (HTTP {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the API
        body: String,
    },

    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Local filesystem failure while saving a download
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(format!("JSON: {}", err))
    }
}

/// Async client for the CourtListener API.
///
/// Cheap to construct; the underlying HTTP session is built on the first
/// request and reused until [`close`](CourtListenerClient::close) is called.
#[derive(Debug)]
pub struct CourtListenerClient {
    config: ApiConfig,
    session: Mutex<Option<Arc<Client>>>,
}

impl CourtListenerClient {
    /// Create a client from the default configuration
    pub fn new() -> Self {
        Self::with_config(get_config().api)
    }

    /// Create a client with explicit API settings
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            config,
            session: Mutex::new(None),
        }
    }

    /// Return the shared HTTP session, building it on first use.
    ///
    /// Fails with [`ClientError::Configuration`] when no API token is
    /// available; nothing touches the network until a token is present.
    pub fn session(&self) -> Result<Arc<Client>, ClientError> {
        let mut guard = self.session.lock().unwrap();
        if let Some(client) = guard.as_ref() {
            return Ok(client.clone());
        }

        let client = Arc::new(self.build_session()?);
        *guard = Some(client.clone());
        Ok(client)
    }

    /// Drop the current session. The next request builds a fresh one.
    pub fn close(&self) {
        let mut guard = self.session.lock().unwrap();
        *guard = None;
    }

    fn build_session(&self) -> Result<Client, ClientError> {
        let token = self
            .config
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ClientError::Configuration(format!(
                    "{} environment variable not set. \
                     Get your token at https://www.courtlistener.com/profile/api/",
                    TOKEN_ENV
                ))
            })?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Token {}", token))
            .map_err(|e| ClientError::Configuration(format!("Invalid API token: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!("Created CourtListener session");
        Ok(client)
    }

    /// GET a JSON resource, decoding into `T`
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let client = self.session()?;
        tracing::debug!("GET {}", url);

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse JSON: {}", e)))
    }

    /// GET a binary resource (PDF downloads)
    pub(crate) async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ClientError> {
        let client = self.session()?;
        tracing::debug!("GET {}", url);

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to read body from {}: {}", url, e)))?;
        Ok(bytes.to_vec())
    }

    /// Join an endpoint onto the REST base URL
    pub(crate) fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }
}

impl Default for CourtListenerClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Public case page for a cluster on courtlistener.com
pub(crate) fn opinion_page(cluster_id: i64) -> String {
    format!("https://www.courtlistener.com/opinion/{}/", cluster_id)
}
