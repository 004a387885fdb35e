//! # ripdash-adapter-http-reqwest
//!
//! [`HttpClient`] implementation built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Resolve request paths against the configured backend base URL
//! - Attach the `Authorization: Bearer <token>` header and JSON body
//! - Hand back every received response (any status) with its body parsed
//!   as JSON when possible; only failures to get a response are errors
//!
//! No timeout is configured: a hung request stays pending, matching the
//! controllers' "no cancellation" contract.
//!
//! ## Dependency rule
//! Depends on `ripdash-app` (port traits) and `ripdash-domain` only.

mod error;

pub use error::HttpError;

use reqwest::header::AUTHORIZATION;
use reqwest::Url;
use ripdash_app::ports::{ApiRequest, ApiResponse, HttpClient, Method, TransportError};

/// Backend client over a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client for the backend at `base_url` (e.g. `http://127.0.0.1:5000`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        let parsed = Url::parse(base_url).map_err(|err| HttpError::InvalidBaseUrl {
            url: base_url.to_string(),
            source: Box::new(err),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(HttpError::NotABase(base_url.to_string()));
        }
        Ok(Self::with_client(parsed, reqwest::Client::new()))
    }

    /// Wrap an existing reqwest client.
    #[must_use]
    pub fn with_client(base_url: Url, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }

    /// The backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, path: &str) -> Result<Url, HttpError> {
        self.base_url
            .join(path)
            .map_err(|err| HttpError::InvalidPath {
                path: path.to_string(),
                source: Box::new(err),
            })
    }

    async fn exchange(&self, request: ApiRequest) -> Result<ApiResponse, HttpError> {
        let url = self.resolve(&request.path)?;
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header(AUTHORIZATION, token.bearer());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes).ok();
        tracing::debug!(
            method = ?request.method,
            path = %request.path,
            status,
            json = body.is_some(),
            "backend responded"
        );

        Ok(ApiResponse { status, body })
    }
}

impl HttpClient for ReqwestClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.exchange(request).await.map_err(|err| {
            tracing::debug!(error = ?err, "backend request failed");
            err.into()
        })
    }
}
