//! CuraVyom - Landing page frontend (Rust/Leptos)
//!
//! A WebAssembly frontend rendering the CuraVyom marketing site's hero
//! section: an animated particle field behind the headline and the two
//! calls to action.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (Router)                                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  "/"          Hero                                           │
//! │               ├── grid backdrop, glows        (decorative)  │
//! │               ├── ParticleField ── FrameLoop ── CanvasSurface│
//! │               ├── HeroContent   ── Entrance (one-shot)       │
//! │               └── fade overlay                               │
//! │  "/use-case"  UseCasePage                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Compile-time constants
//! - [`types`] - Surface state and error types
//! - [`scene`] - Point cloud, rotation, scene graph, camera, canvas surface
//! - [`frame`] - Scoped `requestAnimationFrame` loop
//! - [`motion`] - Entrance transition and easing
//! - [`content`] - Static copy and call-to-action targets
//! - [`layout`] - Layer stacking and input rules
//! - [`components`] - Leptos components

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod content;
pub mod frame;
pub mod layout;
pub mod motion;
pub mod scene;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, SurfaceState};

// Components
pub use components::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Hero/>
                    <Route path=USE_CASE_ROUTE view=UseCasePage/>
                </Routes>
            </main>
        </Router>
    }
}
