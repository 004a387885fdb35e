//! # ripdash-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HttpClient`: send one JSON request to the backend
//!   - `TokenStore`: read/write the persisted bearer token
//!   - `QueryView` / `DashboardView`: apply render models to a UI
//! - Define **driving/inbound** use-case structs:
//!   - `QueryController`: login, static router list, RIP database/status
//!   - `DashboardPoller`: router cards and routing tables from a stored token
//! - Provide the cancellable repeating [`schedule::PollTask`]
//!
//! ## Dependency rule
//! Depends on `ripdash-domain` only (plus `tokio` for the poll timer).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod schedule;
pub mod services;

#[cfg(test)]
mod test_support;
