//! # CuraVyom - landing site API
//!
//! Backend for the CuraVyom marketing site: status, newsletter sign-up,
//! contact form and research file upload.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Frontend   │────▶│  axum API   │────▶│  Analysis   │
//! │ (Leptos/WA) │ CORS│  (handlers) │     │ (by name)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Port, latency simulation, CORS origins
//! - [`error`] - Server error type and its HTTP mapping
//! - [`api`] - Router, handlers, request/response types

pub mod api;
pub mod config;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};

pub use api::types::{
    ContactRequest, MessageResponse, StatusResponse, SubscriptionRequest, UploadAnalysis,
    UploadKind,
};
pub use api::{analyze, classify};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
