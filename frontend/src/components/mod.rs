//! UI Components for the CuraVyom landing page.
//!
//! # Sections
//! - [`Hero`] - Full-viewport hero with particle field and calls to action
//! - [`UseCasePage`] - Target of the primary call to action
//!
//! # Building Blocks
//! - [`ParticleField`] - Canvas layer driven by the frame loop
//! - [`ActionLink`] - Route link or isolated external link
//! - [`Button`] - Button face with size, variant and icon
//! - [`IconSvg`] - Inline SVG icons

mod action_link;
mod button;
mod hero;
mod icons;
mod particle_field;
mod use_case;

pub use action_link::*;
pub use button::*;
pub use hero::*;
pub use icons::*;
pub use particle_field::*;
pub use use_case::*;
