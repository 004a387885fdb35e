//! Render model: pure mapping from backend data to what a view displays.
//!
//! Views (terminal, browser) only apply these models; all data shaping
//! happens here so it can be tested without any UI.

use std::fmt;

use serde_json::Value;

use crate::error::RipDashError;
use crate::route::RouteEntry;
use crate::router::{Router, RouterId};

/// Column headers of the routing table, in display order.
pub const ROUTING_TABLE_HEADERS: [&str; 3] = ["Destination", "Next Hop", "Metric"];

/// Banner text when the router poll fails.
pub const ROUTERS_FAILED: &str = "Failed to fetch routers";

/// Banner text when a routing-table fetch fails.
pub const ROUTING_TABLE_FAILED: &str = "Failed to fetch routing table";

/// Alert shown when the login form is incomplete.
pub const MISSING_CREDENTIALS_ALERT: &str = "Please enter both username and password";

/// Alert shown when a query is attempted before logging in.
pub const NOT_AUTHENTICATED_ALERT: &str = "Please authenticate first";

/// Alert shown when the backend rejects a login or cannot be reached.
#[must_use]
pub fn login_failed_alert(reason: &str) -> String {
    format!("Authentication failed: {reason}")
}

/// Visual style of a router status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Success,
    Danger,
}

impl BadgeStyle {
    /// CSS class applied to the badge element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "bg-success",
            Self::Danger => "bg-danger",
        }
    }
}

/// One card of the router list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterCard {
    /// Target of the card's "View Routes" action.
    pub router_id: RouterId,
    pub name: String,
    pub ip_address: String,
    pub status: String,
    pub badge: BadgeStyle,
}

/// Build one card per router, preserving input order.
#[must_use]
pub fn router_cards(routers: &[Router]) -> Vec<RouterCard> {
    routers
        .iter()
        .map(|router| RouterCard {
            router_id: router.id.clone(),
            name: router.name.clone(),
            ip_address: router.ip_address.clone(),
            status: router.status.to_string(),
            badge: if router.status.is_connected() {
                BadgeStyle::Success
            } else {
                BadgeStyle::Danger
            },
        })
        .collect()
}

/// One body row of the routing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRow {
    pub destination: String,
    pub next_hop: String,
    pub metric: String,
    /// `false` once the metric reaches RIP infinity.
    pub reachable: bool,
}

/// Routing table ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTable {
    pub headers: [&'static str; 3],
    pub rows: Vec<RouteRow>,
}

/// Build the routing table in backend order; no sorting.
#[must_use]
pub fn routing_table(routes: &[RouteEntry]) -> RoutingTable {
    RoutingTable {
        headers: ROUTING_TABLE_HEADERS,
        rows: routes
            .iter()
            .map(|route| RouteRow {
                destination: route.destination.clone(),
                next_hop: route.next_hop.clone(),
                metric: route.metric.to_string(),
                reachable: route.is_reachable(),
            })
            .collect(),
    }
}

/// A dismissible error banner, prepended above existing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub dismissible: bool,
}

impl Banner {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dismissible: true,
        }
    }
}

/// Pretty-print a response body: sorted keys, 2-space indent.
#[must_use]
pub fn pretty_json(body: &Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}

/// Text written to the output area when a query fails.
#[must_use]
pub fn error_output(message: &str) -> String {
    format!("Error: {message}")
}

/// What the query form shows after a login or RIP query.
///
/// Local problems (missing input, no session) and login failures interrupt
/// the user with an alert. Query results, failed ones included, land in the
/// output area and never alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFeedback {
    Alert(String),
    Output(String),
}

impl QueryFeedback {
    /// Feedback for a successful query body.
    #[must_use]
    pub fn for_body(body: &Value) -> Self {
        Self::Output(pretty_json(body))
    }

    /// Feedback for a failed login or query.
    #[must_use]
    pub fn for_error(err: &RipDashError) -> Self {
        match err {
            RipDashError::Validation(_) => Self::Alert(MISSING_CREDENTIALS_ALERT.to_string()),
            RipDashError::NotAuthenticated(_) => Self::Alert(NOT_AUTHENTICATED_ALERT.to_string()),
            RipDashError::Auth(err) => Self::Alert(login_failed_alert(&err.message)),
            RipDashError::Request(err) => Self::Output(error_output(&err.message)),
        }
    }
}

/// The two dashboard fetches.
///
/// A failure of either is logged and bannered; what is already on screen
/// stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardFetch {
    Routers,
    RoutingTable,
}

impl DashboardFetch {
    /// Banner prepended when this fetch fails.
    #[must_use]
    pub fn failure_banner(self) -> Banner {
        Banner::error(match self {
            Self::Routers => ROUTERS_FAILED,
            Self::RoutingTable => ROUTING_TABLE_FAILED,
        })
    }
}

impl fmt::Display for DashboardFetch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Routers => f.write_str("routers"),
            Self::RoutingTable => f.write_str("routing table"),
        }
    }
}
