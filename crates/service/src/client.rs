//! REST client implementation.
//!
//! This module provides the [`ServiceClient`] struct, a thin wrapper around
//! [`reqwest::Client`] that knows the service base URL, applies the request
//! timeout and turns every unsuccessful response into a [`ServiceError`].

use std::time::Duration;

use async_trait::async_trait;
use labboard_protocol::{ItemId, Researcher, Version};
use reqwest::header::{HeaderValue, IF_MATCH};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::error::{Result, ServiceError};
use crate::service::ResearcherDirectory;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client bound to one data service deployment.
///
/// Cloning is cheap; clones share the connection pool.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use labboard_service::ServiceClient;
///
/// # async fn example() -> labboard_service::Result<()> {
/// let client = ServiceClient::new("http://localhost:3000", Duration::from_secs(5))?;
/// for researcher in client.list_researchers("/researchers").await? {
///     println!("{researcher}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ServiceClient {
    inner: Client,
    base_url: Url,
    timeout: Duration,
}

impl ServiceClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidUrl`] if `base_url` is not an absolute
    /// http(s) URL, or [`ServiceError::Transport`] if the HTTP client cannot
    /// be initialized.
    #[instrument(skip(timeout), fields(timeout_ms = timeout.as_millis()))]
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| ServiceError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ServiceError::InvalidUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let inner = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        debug!("created service client");
        Ok(Self {
            inner,
            base_url: parsed,
            timeout,
        })
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves `path` against the base URL.
    ///
    /// Paths are appended to the base URL's path, so a base of
    /// `http://host/api` and a path of `/projects` give
    /// `http://host/api/projects`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidUrl`] if the result is not a valid URL.
    pub fn url(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ServiceError::InvalidUrl {
            url: joined,
            reason: e.to_string(),
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        Ok(self.inner.request(method, self.url(path)?))
    }

    /// Sends a request and classifies unsuccessful responses.
    async fn send(&self, request: RequestBuilder, id: Option<ItemId>) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            let err = ServiceError::from(e);
            warn!(error = %err, "request failed");
            err
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ServiceError::from_status(status, id, &body);
        warn!(status = status.as_u16(), error = %err, "service returned an error");
        Err(err)
    }

    /// Reads a JSON body, treating an empty body as `None`.
    async fn read_json<R: DeserializeOwned>(response: Response) -> Result<Option<R>> {
        let bytes = response.bytes().await.map_err(ServiceError::from)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Fetches and decodes the resource at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        debug!("GET");
        let response = self.send(self.request(Method::GET, path)?, None).await?;
        Self::read_json(response)
            .await?
            .ok_or_else(|| ServiceError::Decode("empty response body".to_string()))
    }

    /// Posts `body` as JSON and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self, body))]
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        debug!("POST");
        let request = self.request(Method::POST, path)?.json(body);
        let response = self.send(request, None).await?;
        Self::read_json(response)
            .await?
            .ok_or_else(|| ServiceError::Decode("empty response body".to_string()))
    }

    /// Patches the item `id` at `path` with `body`.
    ///
    /// When `version` is known it is sent as an `If-Match` precondition.
    /// Returns `None` when the service answers without a body, or with one
    /// that does not decode as `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Conflict`] when the precondition fails, or
    /// any other classified error.
    #[instrument(skip(self, body))]
    pub async fn patch_json<B, R>(
        &self,
        path: &str,
        id: ItemId,
        version: Option<Version>,
        body: &B,
    ) -> Result<Option<R>>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        debug!("PATCH");
        let mut request = self.request(Method::PATCH, path)?.json(body);
        if let Some(version) = version {
            request = request.header(IF_MATCH, if_match(version));
        }
        let response = self.send(request, Some(id)).await?;
        // The patch is applied once the status is a success.
        match Self::read_json(response).await {
            Ok(answer) => Ok(answer),
            Err(err) => {
                debug!(error = %err, "ignoring unreadable patch answer");
                Ok(None)
            }
        }
    }

    /// Deletes the item `id` at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if the item does not exist, or
    /// any other classified error.
    #[instrument(skip(self))]
    pub async fn delete(&self, path: &str, id: ItemId) -> Result<()> {
        debug!("DELETE");
        self.send(self.request(Method::DELETE, path)?, Some(id))
            .await?;
        Ok(())
    }

    /// Lists the researcher directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn list_researchers(&self, path: &str) -> Result<Vec<Researcher>> {
        let researchers: Vec<Researcher> = self.get_json(path).await?;
        debug!(count = researchers.len(), "fetched researchers");
        Ok(researchers)
    }
}

/// Formats a version as a strong entity tag.
fn if_match(version: Version) -> HeaderValue {
    HeaderValue::from_str(&format!("\"{version}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("*"))
}

/// A researcher directory served by the REST service.
#[derive(Debug, Clone)]
pub struct RemoteDirectory {
    client: ServiceClient,
    path: String,
}

impl RemoteDirectory {
    #[must_use]
    pub fn new(client: ServiceClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }
}

#[async_trait]
impl ResearcherDirectory for RemoteDirectory {
    async fn researchers(&self) -> Result<Vec<Researcher>> {
        self.client.list_researchers(&self.path).await
    }
}
