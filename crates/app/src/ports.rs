//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod http;
pub mod token_store;
pub mod view;

pub use http::{ApiRequest, ApiResponse, HttpClient, Method, TransportError};
pub use token_store::{TokenStore, TokenStoreError};
pub use view::{DashboardView, QueryView};
