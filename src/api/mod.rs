// Analysis service API module.
// Provides the client and types for the /api/analyze endpoint.

pub mod client;
pub mod types;

pub use client::{ANALYSIS_FAILED, AnalyzeClient, OPAQUE_SERVER_ERROR, server_error_message};
pub use types::*;
