#![deny(clippy::all, clippy::pedantic)]

//! HTTP plumbing shared by every resource wrapper.
//!
//! One [`ApiClient`] per base address. Each call produces exactly one request;
//! nothing is retried or cached, and non-2xx statuses come back as ordinary
//! [`ApiResponse`] values for the caller to assert on.

use std::time::Duration;

use reqwest::{Client, Method};
use thiserror::Error;
use url::Url;

use crate::config::Settings;

mod request;
mod response;

pub use request::PendingRequest;
pub use response::ApiResponse;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read attachment {path}: {source}")]
    Attachment {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected response: {0}")]
    UnexpectedBody(String),
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    /// Client for an arbitrary base address.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Url`] when `base_url` does not parse and
    /// [`ClientError::Http`] when the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Self::with_base(Url::parse(base_url)?, timeout)
    }

    /// Client for the storefront service described by `settings.api.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] when the HTTP client cannot be built.
    pub fn from_settings(settings: &Settings) -> Result<Self, ClientError> {
        Self::with_base(settings.api.base_url.clone(), settings.api.timeout)
    }

    /// Client for the public placeholder service used by the sandbox specs.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] when the HTTP client cannot be built.
    pub fn sandbox(settings: &Settings) -> Result<Self, ClientError> {
        Self::with_base(settings.api.sandbox_url.clone(), settings.api.timeout)
    }

    fn with_base(mut base: Url, timeout: Duration) -> Result<Self, ClientError> {
        // `Url::join` replaces the last segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);

        let http = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()?;
        Ok(Self { http, base })
    }

    #[must_use]
    pub fn user_agent() -> &'static str {
        concat!("storefront-api/", env!("CARGO_PKG_VERSION"))
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve `path` under the base address, keeping any base path prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Url`] when `path` cannot be joined onto the base.
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(ClientError::Url)
    }

    /// Start a request to `path`. Nothing goes on the wire until the returned
    /// handle is awaited.
    pub fn request(&self, method: Method, path: &str) -> PendingRequest {
        match self.url(path) {
            Ok(url) => {
                let builder = self.http.request(method.clone(), url.clone());
                PendingRequest::new(method, url.to_string(), Ok(builder))
            }
            Err(err) => PendingRequest::new(method, path.to_string(), Err(err)),
        }
    }

    pub fn get(&self, path: &str) -> PendingRequest {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> PendingRequest {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> PendingRequest {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> PendingRequest {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> PendingRequest {
        self.request(Method::DELETE, path)
    }
}

#[cfg(test)]
mod tests;
