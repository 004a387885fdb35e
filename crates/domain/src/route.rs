//! Route entry: one line of a router's RIP routing table.

use serde::{Deserialize, Serialize};

/// RIP hop count that means "unreachable".
pub const RIP_INFINITY: u32 = 16;

/// A routing-table entry as returned by `GET /api/routers/{id}/routes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub destination: String,
    pub next_hop: String,
    pub metric: u32,
}

impl RouteEntry {
    /// Whether the metric is below RIP infinity.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.metric < RIP_INFINITY
    }
}
