//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Surface Types** - lifecycle of the particle rendering surface
//! - **Error Types** - frontend error handling

use std::fmt;

// =============================================================================
// Surface Types
// =============================================================================

/// Lifecycle of the particle field's rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceState {
    /// Mounted, waiting for the canvas to attach.
    Initializing,
    /// Canvas attached and the frame loop running.
    Live,
    /// No 2-D context (or no window); the particle layer stays hidden.
    Unavailable,
}

impl SurfaceState {
    /// Whether the particle layer should be displayed.
    pub fn is_displayed(self) -> bool {
        !matches!(self, SurfaceState::Unavailable)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Rendering surface could not be created or drawn to.
    Surface(String),
    /// Frame callback registration failed.
    Frame(String),
    /// Host environment is missing something we need (window, document).
    Environment(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Surface(msg) => write!(f, "Surface error: {}", msg),
            AppError::Frame(msg) => write!(f, "Frame loop error: {}", msg),
            AppError::Environment(msg) => write!(f, "Environment error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_surface_is_hidden() {
        assert!(SurfaceState::Initializing.is_displayed());
        assert!(SurfaceState::Live.is_displayed());
        assert!(!SurfaceState::Unavailable.is_displayed());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Surface("2d context unavailable".into());
        assert_eq!(err.to_string(), "Surface error: 2d context unavailable");
    }
}
