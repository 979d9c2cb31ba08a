//! HTTP API module.
//!
//! The HTTP server, its request/response types and upload classification.

pub mod server;
pub mod types;
pub mod upload;

pub use server::{router, start_server, AppState};
pub use types::*;
pub use upload::{analyze, classify};
