//! Authenticated API client for the platform REST backend
//!
//! This client performs one HTTP call per logical operation against the
//! landing API, the masjid domain API, or an absolute moderation endpoint.
//! Two cross-cutting behaviors apply uniformly regardless of operation:
//! a 401 clears the session and fires the session authority once, and a
//! 500 raises a blocking notification before the error propagates.
//! There is no retry, no backoff and no per-call timeout beyond the
//! transport default configured at construction.

use std::sync::Arc;
use std::time::Duration;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;
use crate::config::ApiConfig;
use crate::utils::errors::{Result, UmmahError};
use super::session::{Notifier, SessionAuthority, SessionStore};

/// Logical endpoint addressing for the platform's base paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Path relative to the landing/ummah API
    Landing(String),
    /// Path relative to the masjid domain API
    Masjid(String),
    /// Absolute URL, used by the standalone moderation modules
    Absolute(String),
}

impl Endpoint {
    pub fn landing(path: impl Into<String>) -> Self {
        Endpoint::Landing(path.into())
    }

    pub fn masjid(path: impl Into<String>) -> Self {
        Endpoint::Masjid(path.into())
    }

    pub fn absolute(url: impl Into<String>) -> Self {
        Endpoint::Absolute(url.into())
    }

    /// Resolve to a full URL against the configured base paths
    pub fn resolve(&self, config: &ApiConfig) -> Result<Url> {
        let joined = match self {
            Endpoint::Landing(path) => format!("{}/{}", config.landing_url.trim_end_matches('/'), path.trim_start_matches('/')),
            Endpoint::Masjid(path) => format!("{}/{}", config.masjid_url.trim_end_matches('/'), path.trim_start_matches('/')),
            Endpoint::Absolute(url) => url.clone(),
        };
        Ok(Url::parse(&joined)?)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Landing(path) => write!(f, "landing:{}", path),
            Endpoint::Masjid(path) => write!(f, "masjid:{}", path),
            Endpoint::Absolute(url) => write!(f, "{}", url),
        }
    }
}

/// Authenticated resource client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    store: Arc<dyn SessionStore>,
    authority: Arc<dyn SessionAuthority>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(
        config: ApiConfig,
        store: Arc<dyn SessionStore>,
        authority: Arc<dyn SessionAuthority>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(UmmahError::Http)?;

        Ok(Self {
            client,
            config,
            store,
            authority,
            notifier,
        })
    }

    /// Fetch a JSON resource
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let url = endpoint.resolve(&self.config)?;
        debug!(endpoint = %endpoint, "GET");
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json::<T>().await?)
    }

    /// Create a resource, returning the parsed response body
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: &B,
    ) -> Result<T> {
        let url = endpoint.resolve(&self.config)?;
        debug!(endpoint = %endpoint, "POST");
        let response = self.send(self.client.post(url).json(body)).await?;
        Ok(response.json::<T>().await?)
    }

    /// Update a resource in place (full-record submission)
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: &B,
    ) -> Result<T> {
        let url = endpoint.resolve(&self.config)?;
        debug!(endpoint = %endpoint, "PUT");
        let response = self.send(self.client.put(url).json(body)).await?;
        Ok(response.json::<T>().await?)
    }

    /// Delete a resource
    pub async fn delete(&self, endpoint: &Endpoint) -> Result<()> {
        let url = endpoint.resolve(&self.config)?;
        debug!(endpoint = %endpoint, "DELETE");
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    /// Hand an opaque binary file (spreadsheet import) to the server as-is
    pub async fn upload_file(&self, endpoint: &Endpoint, bytes: Vec<u8>) -> Result<serde_json::Value> {
        let url = endpoint.resolve(&self.config)?;
        debug!(endpoint = %endpoint, size = bytes.len(), "POST (file upload)");
        let response = self
            .send(
                self.client
                    .post(url)
                    .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
                    .body(bytes),
            )
            .await?;
        Ok(response.json::<serde_json::Value>().await?)
    }

    /// Fetch an opaque binary file (spreadsheet export)
    pub async fn download_file(&self, endpoint: &Endpoint) -> Result<Vec<u8>> {
        let url = endpoint.resolve(&self.config)?;
        debug!(endpoint = %endpoint, "GET (file download)");
        let response = self.send(self.client.get(url)).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Attach the auth header (token read fresh from durable storage at
    /// call time), send, and apply the uniform status policy.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = match self.store.token() {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, format!("Token {}", token)),
            None => request,
        };

        let response = request.send().await?;
        self.apply_status_policy(response).await
    }

    async fn apply_status_policy(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("Received 401, invalidating session");
            if let Err(e) = self.store.clear() {
                warn!(error = %e, "Failed to clear session store after 401");
            }
            self.authority.on_unauthorized();
            return Err(UmmahError::Unauthorized);
        }

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            let body = response.text().await.unwrap_or_default();
            self.notifier.notify_blocking("The server encountered an error. Please try again later.");
            return Err(UmmahError::Server { body });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UmmahError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_endpoint_resolution() {
        let config = Settings::default().api;

        let url = Endpoint::landing("madrasa/enrollments").resolve(&config).unwrap();
        assert_eq!(url.as_str(), "https://api.ummah.example/landing/madrasa/enrollments");

        let url = Endpoint::masjid("/profile").resolve(&config).unwrap();
        assert_eq!(url.as_str(), "https://api.ummah.example/masjid/profile");

        let url = Endpoint::absolute("https://moderation.ummah.example/daawah/approve")
            .resolve(&config)
            .unwrap();
        assert_eq!(url.as_str(), "https://moderation.ummah.example/daawah/approve");
    }

    #[test]
    fn test_malformed_absolute_endpoint() {
        let config = Settings::default().api;
        let result = Endpoint::absolute("not-a-url").resolve(&config);
        assert!(result.is_err());
    }
}
