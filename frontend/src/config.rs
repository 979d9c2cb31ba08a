//! Application configuration.
//!
//! Centralized constants for the CuraVyom landing page. Everything here is
//! fixed at compile time; the hero section takes no runtime parameters.

use std::f32::consts::FRAC_PI_4;

// =============================================================================
// Particle field
// =============================================================================

/// Number of points in the particle cloud.
pub const PARTICLE_COUNT: usize = 5000;

/// Radius of the sphere the particles are sampled in (scene units).
pub const PARTICLE_RADIUS: f32 = 1.5;

/// Point size in scene units, before distance attenuation.
pub const PARTICLE_SIZE: f32 = 0.002;

/// Particle colour (CSS hex).
pub const PARTICLE_COLOR: &str = "#00F2FF";

/// Static tilt of the whole cloud about the viewing (Z) axis.
pub const PARTICLE_TILT_Z: f32 = FRAC_PI_4;

/// X rotation decreases by `delta / X_ROTATION_DIVISOR` each frame.
pub const X_ROTATION_DIVISOR: f64 = 10.0;

/// Y rotation decreases by `delta / Y_ROTATION_DIVISOR` each frame.
pub const Y_ROTATION_DIVISOR: f64 = 15.0;

/// Opacity of the whole particle layer.
pub const PARTICLE_LAYER_OPACITY: f32 = 0.6;

// =============================================================================
// Camera
// =============================================================================

/// Camera distance from the origin along +Z.
pub const CAMERA_Z: f32 = 1.0;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f32 = 75.0;

/// Near clipping plane.
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clipping plane.
pub const CAMERA_FAR: f32 = 1000.0;

// =============================================================================
// Entrance transition
// =============================================================================

/// Duration of the foreground entrance, in seconds.
pub const ENTRANCE_DURATION_SECS: f64 = 0.8;

/// Initial downward offset of the foreground content, in CSS pixels.
pub const ENTRANCE_OFFSET_Y: f64 = 20.0;

// =============================================================================
// Page
// =============================================================================

/// Page background colour, also the bottom stop of the fade overlay.
pub const PAGE_BACKGROUND: &str = "#020617";

/// Period of the pulsing glow, in seconds.
pub const GLOW_PULSE_SECS: f64 = 4.0;

/// Internal route opened by the primary call to action.
pub const USE_CASE_ROUTE: &str = "/use-case";

/// Demo video opened by the secondary call to action.
pub const DEMO_VIDEO_URL: &str = "https://youtu.be/bnZej91-ImQ";

/// Application name, used in logs and the document title.
pub const APP_NAME: &str = "CuraVyom";
