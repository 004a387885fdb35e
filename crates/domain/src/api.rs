//! Backend API paths and response-body conventions.

use serde_json::Value;

use crate::router::{RouterId, RouterSelection};

/// Login endpoint (`POST`, JSON `{username, password}`).
pub const TOKEN_PATH: &str = "/api/v1/token";

/// Router inventory collection.
pub const ROUTERS_PATH: &str = "/api/routers";

/// The two RIP views the query form can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RipResource {
    Database,
    Status,
}

impl RipResource {
    /// Collection path, without a router segment.
    #[must_use]
    pub fn base_path(self) -> &'static str {
        match self {
            Self::Database => "/api/v1/rip/database",
            Self::Status => "/api/v1/rip/status",
        }
    }
}

impl std::fmt::Display for RipResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Database => f.write_str("database"),
            Self::Status => f.write_str("status"),
        }
    }
}

/// Path for a RIP query. `all` targets the collection itself.
///
/// The router name is percent-encoded as a single path segment.
#[must_use]
pub fn rip_path(resource: RipResource, selection: &RouterSelection) -> String {
    match selection {
        RouterSelection::All => resource.base_path().to_string(),
        RouterSelection::Router(name) => {
            format!("{}/{}", resource.base_path(), urlencoding::encode(name))
        }
    }
}

/// Path of a router's routing table, with the id percent-encoded.
#[must_use]
pub fn routes_path(id: &RouterId) -> String {
    format!("{ROUTERS_PATH}/{}/routes", urlencoding::encode(id.as_str()))
}

/// The backend `error` field of a response body, when it carries a
/// non-empty string.
#[must_use]
pub fn backend_error(body: &Value) -> Option<&str> {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|msg| !msg.is_empty())
}

/// Message used for a non-2xx response that carries no backend error.
#[must_use]
pub fn status_message(status: u16) -> String {
    format!("Request failed with status code {status}")
}
