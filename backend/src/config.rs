//! Server configuration.
//!
//! Built from CLI flags plus the environment (`.env` is loaded by `main`
//! before parsing). `FRONTEND_URL` adds the production site to the CORS
//! allow-list.

use std::path::PathBuf;
use std::time::Duration;

/// Origins always allowed: the Vite dev server and a local preview.
pub const DEV_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8000;

/// Delay before answering a subscription or upload, when simulated.
pub const SUBSCRIBE_DELAY: Duration = Duration::from_millis(1000);
pub const UPLOAD_DELAY: Duration = Duration::from_millis(1000);

/// Delay before answering a contact message, when simulated.
pub const CONTACT_DELAY: Duration = Duration::from_millis(1500);

/// Largest accepted upload body. Research PDFs routinely exceed axum's
/// 2 MiB default.
pub const MAX_UPLOAD_BYTES: usize = 256 * 1024 * 1024;

/// Directory served under `/reports`.
pub const DEFAULT_REPORTS_DIR: &str = "reports";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Sleep like a real mail/analysis backend before answering.
    pub simulate_latency: bool,
    pub allowed_origins: Vec<String>,
    /// Body limit for `/api/upload`, in bytes.
    pub max_upload_bytes: usize,
    /// Generated reports, served read-only under `/reports`.
    pub reports_dir: PathBuf,
}

impl ServerConfig {
    pub fn new(port: u16, simulate_latency: bool) -> Self {
        let frontend_url = std::env::var("FRONTEND_URL").ok();
        Self {
            port,
            simulate_latency,
            allowed_origins: allowed_origins(frontend_url.as_deref()),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
        }
    }

    pub fn with_reports_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.reports_dir = dir.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            simulate_latency: false,
            allowed_origins: allowed_origins(None),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
        }
    }
}

/// Development origins plus the deployed frontend, if configured.
pub fn allowed_origins(frontend_url: Option<&str>) -> Vec<String> {
    let mut origins: Vec<String> = DEV_ORIGINS.iter().map(|o| o.to_string()).collect();
    if let Some(url) = frontend_url.map(|u| u.trim().trim_end_matches('/')) {
        if !url.is_empty() && !origins.iter().any(|o| o == url) {
            origins.push(url.to_string());
        }
    }
    origins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_origins_only() {
        assert_eq!(
            allowed_origins(None),
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
        assert_eq!(allowed_origins(Some("  ")).len(), 2);
    }

    #[test]
    fn test_frontend_url_added_once() {
        let origins = allowed_origins(Some("https://curavyom.app/"));
        assert_eq!(origins.last().map(String::as_str), Some("https://curavyom.app"));

        let origins = allowed_origins(Some("http://localhost:5173"));
        assert_eq!(origins.len(), 2);
    }

    #[test]
    fn test_default_upload_limit_exceeds_axum_default() {
        let config = ServerConfig::default();
        assert!(config.max_upload_bytes > 2 * 1024 * 1024);
        assert_eq!(config.reports_dir, PathBuf::from("reports"));

        let config = config.with_reports_dir("/srv/reports");
        assert_eq!(config.reports_dir, PathBuf::from("/srv/reports"));
    }
}
