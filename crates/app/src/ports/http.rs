//! HTTP port: one JSON request/response exchange with the backend.

use std::future::Future;

use ripdash_domain::api;
use ripdash_domain::session::AccessToken;
use serde_json::Value;

/// HTTP methods used by the clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request relative to the backend base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute path, e.g. `/api/routers`.
    pub path: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer: Option<AccessToken>,
    /// Sent as a JSON body when present.
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            bearer: None,
            body: None,
        }
    }

    #[must_use]
    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            bearer: None,
            body: Some(body),
        }
    }

    #[must_use]
    pub fn bearer(mut self, token: Option<&AccessToken>) -> Self {
        self.bearer = token.cloned();
        self
    }
}

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body; `None` when the body is empty or not JSON.
    pub body: Option<Value>,
}

impl ApiResponse {
    /// Whether the status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// User-visible reason for a non-2xx response: the backend `error`
    /// field if present, else the generic status message.
    #[must_use]
    pub fn failure_message(&self) -> String {
        self.body
            .as_ref()
            .and_then(api::backend_error)
            .map_or_else(|| api::status_message(self.status), str::to_string)
    }
}

/// The request never produced a response (connection refused, DNS, ...).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sends requests to the backend.
///
/// Implementations resolve `path` against their base URL, attach the bearer
/// header and JSON body, and return any received response as `Ok`, including
/// non-2xx ones. Only failures to obtain a response are `Err`.
pub trait HttpClient {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;
}

impl<T: HttpClient + Send + Sync> HttpClient for std::sync::Arc<T> {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send {
        (**self).send(request)
    }
}
