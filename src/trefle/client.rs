//! Trefle Client
//!
//! Thin wrapper around `reqwest::Client` that builds Trefle URLs, injects the
//! API token and turns non-success responses into `UpstreamError::Status`.

use std::fmt;
use std::time::Duration;

use axum::http::StatusCode;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{ProxyError, Result, UpstreamError};
use crate::models::PlantListQuery;

const USER_AGENT: &str = concat!("plant_proxy/", env!("CARGO_PKG_VERSION"));

// == Trefle Client ==
/// HTTP client for the Trefle plant API.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct TrefleClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl TrefleClient {
    // == Constructor ==
    /// Creates a new client against `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - Absolute API base, e.g. `https://trefle.io/api/v1`
    /// * `token` - Secret token appended to every request
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    /// Returns `ProxyError::Config` if the base URL is not an absolute
    /// hierarchical URL or the HTTP client cannot be built.
    pub fn new(base_url: &str, token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| {
            ProxyError::Config(format!("Invalid Trefle base URL '{}': {}", base_url, e))
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ProxyError::Config(format!(
                "Trefle base URL '{}' cannot be used as a base",
                base_url
            )));
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProxyError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: parsed,
            token: token.into(),
        })
    }

    /// Creates a new client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.upstream_base_url,
            config.api_token.clone(),
            Duration::from_secs(config.upstream_timeout),
        )
    }

    // == Endpoints ==
    /// Fetches a page of plants, forwarding `page` and `q` untouched.
    pub async fn list_plants(
        &self,
        query: &PlantListQuery,
    ) -> std::result::Result<Value, UpstreamError> {
        let url = self.endpoint(&["plants"]);
        self.fetch(url, &query.as_pairs()).await
    }

    /// Fetches a single plant by id.
    ///
    /// The id is appended as one percent-encoded path segment, so values
    /// containing `/` or `..` stay inside `/plants/`.
    pub async fn plant(&self, id: &str) -> std::result::Result<Value, UpstreamError> {
        let url = self.endpoint(&["plants", id]);
        self.fetch(url, &[]).await
    }

    // == Helpers ==
    /// Appends path segments to the base URL.
    ///
    /// `new` only accepts base URLs that can take path segments.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Performs a GET with the token injected and decodes a JSON body.
    async fn fetch(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> std::result::Result<Value, UpstreamError> {
        debug!("Forwarding request to Trefle: GET {}", url.path());

        let response = self
            .http
            .get(url)
            .query(&[("token", self.token.as_str())])
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
                reason: reason_phrase(&response),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

/// Reason phrase as sent on the wire.
///
/// hyper only keeps the phrase when it differs from the canonical one, so the
/// canonical phrase is the fallback and unknown codes get an empty string.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

impl fmt::Debug for TrefleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrefleClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}
