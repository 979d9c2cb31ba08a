//! Stacking of the hero's visual layers.
//!
//! Layers are emitted in [`HeroLayer::ORDER`] (DOM order). The fade overlay
//! comes last in the DOM but sits under the foreground content through its
//! z-index, so the call-to-action controls stay clickable.

use crate::config::{PAGE_BACKGROUND, PARTICLE_LAYER_OPACITY};
use crate::types::SurfaceState;

/// CSS `pointer-events` value for a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvents {
    Auto,
    None,
}

impl PointerEvents {
    pub fn css(&self) -> &'static str {
        match self {
            PointerEvents::Auto => "auto",
            PointerEvents::None => "none",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroLayer {
    /// Grid lines under a radial fade mask.
    GridBackdrop,
    /// Two blurred glow blobs, one pulsing.
    Glows,
    /// Canvas hosting the particle field.
    ParticleField,
    /// Badge, headline, description and actions.
    Content,
    /// Page-colour gradient rising from the bottom edge.
    FadeOverlay,
}

impl HeroLayer {
    pub const ORDER: [HeroLayer; 5] = [
        HeroLayer::GridBackdrop,
        HeroLayer::Glows,
        HeroLayer::ParticleField,
        HeroLayer::Content,
        HeroLayer::FadeOverlay,
    ];

    pub fn z_index(self) -> i32 {
        match self {
            HeroLayer::GridBackdrop | HeroLayer::Glows | HeroLayer::ParticleField => 0,
            HeroLayer::FadeOverlay => 5,
            HeroLayer::Content => 10,
        }
    }

    /// Only the foreground takes input; everything else lets clicks through.
    pub fn pointer_events(self) -> PointerEvents {
        match self {
            HeroLayer::Content => PointerEvents::Auto,
            _ => PointerEvents::None,
        }
    }

    pub fn opacity(self) -> f32 {
        match self {
            HeroLayer::GridBackdrop => 0.2,
            HeroLayer::ParticleField => PARTICLE_LAYER_OPACITY,
            _ => 1.0,
        }
    }

    pub fn is_interactive(self) -> bool {
        self.pointer_events() == PointerEvents::Auto
    }

    /// The particle layer disappears when its surface is unavailable; the
    /// rest of the hero never depends on it.
    pub fn is_visible(self, surface: SurfaceState) -> bool {
        match self {
            HeroLayer::ParticleField => surface.is_displayed(),
            _ => true,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            HeroLayer::GridBackdrop => "hero-layer hero-grid",
            HeroLayer::Glows => "hero-layer hero-glows",
            HeroLayer::ParticleField => "hero-layer hero-particles",
            HeroLayer::Content => "hero-foreground",
            HeroLayer::FadeOverlay => "hero-layer hero-fade",
        }
    }

    /// Inline style carrying the stacking and input rules.
    pub fn style(self, surface: SurfaceState) -> String {
        let mut style = format!(
            "z-index: {}; pointer-events: {}; opacity: {};",
            self.z_index(),
            self.pointer_events().css(),
            self.opacity()
        );
        if self == HeroLayer::FadeOverlay {
            style.push_str(&format!(
                " background: linear-gradient(to top, {}, transparent 50%);",
                PAGE_BACKGROUND
            ));
        }
        if !self.is_visible(surface) {
            style.push_str(" display: none;");
        }
        style
    }

    /// Layers from back to front as the browser paints them.
    pub fn paint_order() -> Vec<HeroLayer> {
        let mut layers = Self::ORDER.to_vec();
        // Stable: equal z-index keeps DOM order.
        layers.sort_by_key(|layer| layer.z_index());
        layers
    }
}
