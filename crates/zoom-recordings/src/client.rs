//! The [`Client`] handle and the request plumbing shared by every endpoint.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, Url};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    auth::{Authenticator, BearerToken, Credentials},
    error::{Error, Result},
};

pub const DEFAULT_ZOOM_API_ENDPOINT: &str = "https://api.zoom.us/v2";

/// Handle to the Zoom cloud recording API.
///
/// Build one per set of credentials and share it; clones are cheap and reuse
/// the same connection pool and authenticator.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) http: reqwest::Client,
    base_url: String,
    auth: Arc<dyn Authenticator>,
}

impl Client {
    /// Creates a client for the public Zoom API using `auth` for every request.
    pub fn new(auth: impl Authenticator + 'static) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_ZOOM_API_ENDPOINT.to_string(),
            auth: Arc::new(auth),
        }
    }

    /// Builds a bearer-token client from configured credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The access token is empty or contains only whitespace
    /// - The endpoint override is empty or not an absolute URL
    pub fn from_credentials(credentials: Credentials) -> Result<Self> {
        let client = Self::new(BearerToken::new(credentials.access_token)?);
        match credentials.endpoint {
            Some(endpoint) => client.with_endpoint(&endpoint),
            None => Ok(client),
        }
    }

    /// Points the client at another API base URL (a proxy, a regional host or
    /// a mock server).
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is empty or cannot serve as a base for
    /// path segments.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        let base_url = normalize_base_url(endpoint)?;
        let parsed = Url::parse(&base_url).map_err(|source| Error::InvalidUrl {
            url: base_url.clone(),
            source,
        })?;
        if parsed.cannot_be_a_base() {
            return Err(Error::InvalidInput(
                "endpoint must be an absolute URL".to_string(),
            ));
        }
        self.base_url = base_url;
        Ok(self)
    }

    /// Replaces the HTTP transport. Timeouts, proxies and TLS settings are
    /// whatever `http` was built with.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// # Errors
    ///
    /// Returns an error if the `base_url` is not an absolute URL (cannot be a
    /// relative URL).
    pub(crate) fn url_with_segments(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|source| Error::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })?;
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                Error::InvalidInput("base_url must be an absolute URL".to_string())
            })?;
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Authenticates and sends `request` without looking at the status.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The authenticator refuses the request
    /// - The HTTP request fails (network error, connection timeout, etc.)
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let request = self.auth.authenticate(request)?;
        request.send().await.map_err(Error::Transport)
    }

    /// Sends an API request and turns non-success statuses into
    /// [`Error::Status`], keeping the error body for diagnosis.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The authenticator refuses the request
    /// - The HTTP request fails (network error, connection timeout, etc.)
    /// - The Zoom API returns a non-success status code
    async fn send_request(&self, request: RequestBuilder) -> Result<Response> {
        let response = self
            .execute(request.header(reqwest::header::ACCEPT, "application/json"))
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Status { status, body })
        }
    }

    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails (network error, connection timeout, etc.)
    /// - The Zoom API returns a non-success status code
    /// - The response body cannot be parsed as JSON
    pub(crate) async fn get_json<Q, T>(&self, url: Url, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(method = %Method::GET, url = %url, "sending Zoom API request");
        let response = self.send_request(self.http.get(url).query(query)).await?;
        response.json::<T>().await.map_err(Error::Decode)
    }

    /// Sends a request whose response carries no meaningful body.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails (network error, connection timeout, etc.)
    /// - The Zoom API returns a non-success status code
    pub(crate) async fn send_empty<Q>(&self, method: Method, url: Url, query: &Q) -> Result<()>
    where
        Q: Serialize + ?Sized,
    {
        debug!(method = %method, url = %url, "sending Zoom API request");
        self.send_request(self.http.request(method, url).query(query))
            .await?;
        Ok(())
    }
}

/// # Errors
///
/// Returns an error if the endpoint is empty or contains only whitespace.
fn normalize_base_url(endpoint: &str) -> Result<String> {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("endpoint must not be empty".to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
