//! # ripdash-domain
//!
//! Pure domain model for the ripdash RIP dashboard client.
//!
//! ## Responsibilities
//! - Foundational types: access tokens, credentials, the session state machine
//! - Define **Routers** (descriptors returned by the backend inventory)
//! - Define **Route entries** (destination / next hop / metric)
//! - Define the backend **API paths** the clients talk to
//! - Map routers and routes to a **render model** that any view can apply
//! - Error taxonomy shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod session;

pub mod api;
pub mod render;
pub mod route;
pub mod router;
