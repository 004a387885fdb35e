//! Router: a RIP-speaking device known to the backend inventory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend identifier of a router.
///
/// The inventory emits numeric ids, but the value is only ever spliced back
/// into a URL, so it is kept as text and accepts any JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RouterId(String);

impl RouterId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RouterId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

/// Connectivity status reported by the backend.
///
/// Only `"connected"` is meaningful to the client; anything else is kept
/// verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RouterStatus {
    Connected,
    Other(String),
}

impl RouterStatus {
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Connected => "connected",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for RouterStatus {
    fn from(raw: String) -> Self {
        if raw == "connected" {
            Self::Connected
        } else {
            Self::Other(raw)
        }
    }
}

impl From<RouterStatus> for String {
    fn from(status: RouterStatus) -> Self {
        match status {
            RouterStatus::Connected => "connected".to_string(),
            RouterStatus::Other(raw) => raw,
        }
    }
}

impl fmt::Display for RouterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Router descriptor as returned by `GET /api/routers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Router {
    pub id: RouterId,
    pub name: String,
    pub ip_address: String,
    pub status: RouterStatus,
}

/// Router names offered by the query form. Not fetched from the backend.
pub const STATIC_ROUTERS: [&str; 3] = ["router1", "router2", "router3"];

/// Target of a RIP database/status query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouterSelection {
    /// A single named router.
    Router(String),
    /// Every router the backend manages.
    All,
}

impl RouterSelection {
    /// The fixed selector contents: the static routers followed by `all`.
    #[must_use]
    pub fn static_options() -> Vec<Self> {
        STATIC_ROUTERS
            .iter()
            .map(|name| Self::Router((*name).to_string()))
            .chain(std::iter::once(Self::All))
            .collect()
    }

    /// The value used both as selector value and path segment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Router(name) => name,
            Self::All => "all",
        }
    }
}

impl fmt::Display for RouterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouterSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "all" {
            Self::All
        } else {
            Self::Router(s.to_string())
        })
    }
}
