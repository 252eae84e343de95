#![warn(missing_docs)]

//! Async GroupMeet API client with typed requests/responses, retries, and wiremock tests.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Concurrent dashboard loading
pub mod dashboard;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Retry logic utilities
pub mod retry;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::GroupmeetConfig;
pub use crate::dashboard::{Dashboard, DashboardLoader};
pub use crate::error::{ApiErrorObject, GroupmeetError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, Dashboard, GroupmeetConfig};
}
