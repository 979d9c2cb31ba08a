//! Hero section: layered backdrop, particle field and foreground copy.

use std::ops::ControlFlow;

use leptos::*;

use super::action_link::ActionLink;
use super::particle_field::ParticleField;
use crate::config::GLOW_PULSE_SECS;
use crate::content::{CopyFragment, HERO_COPY};
use crate::frame::FrameLoop;
use crate::layout::HeroLayer;
use crate::motion::{Entrance, MotionStyle};
use crate::types::SurfaceState;

#[component]
pub fn Hero() -> impl IntoView {
    let (surface, set_surface) = create_signal(SurfaceState::Initializing);
    let style = move |layer: HeroLayer| move || layer.style(surface.get());

    view! {
        <section class="hero">
            <div class=HeroLayer::GridBackdrop.css_class() style=style(HeroLayer::GridBackdrop)></div>

            <div class=HeroLayer::Glows.css_class() style=style(HeroLayer::Glows)>
                <div
                    class="hero-glow hero-glow-pulse"
                    style=format!("animation-duration: {}s;", GLOW_PULSE_SECS)
                ></div>
                <div class="hero-glow hero-glow-static"></div>
            </div>

            <div
                class=HeroLayer::ParticleField.css_class()
                style=style(HeroLayer::ParticleField)
                aria-hidden="true"
            >
                <ParticleField set_surface=set_surface/>
            </div>

            <div class=HeroLayer::Content.css_class() style=style(HeroLayer::Content)>
                <HeroContent/>
            </div>

            <div class=HeroLayer::FadeOverlay.css_class() style=style(HeroLayer::FadeOverlay)></div>
        </section>
    }
}

/// Foreground block with its one-shot entrance.
#[component]
fn HeroContent() -> impl IntoView {
    let mut entrance = Entrance::hero();
    let (motion, set_motion) = create_signal(entrance.initial_style());

    let mut elapsed = 0.0;
    entrance.start(elapsed);
    let frame_loop = FrameLoop::start(move |delta| {
        elapsed += delta;
        set_motion.set(entrance.advance(elapsed));
        if entrance.is_settled() {
            log::debug!("Hero entrance settled");
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    match frame_loop {
        Ok(frame_loop) => on_cleanup(move || drop(frame_loop)),
        Err(e) => {
            // Never leave the copy invisible.
            log::warn!("Hero entrance skipped: {}", e);
            set_motion.set(MotionStyle::RESTING);
        }
    }

    let copy = HERO_COPY;
    let description = copy
        .description
        .iter()
        .map(|fragment| match *fragment {
            CopyFragment::Plain(text) => text.into_view(),
            CopyFragment::Emphasized(text, emphasis) => {
                view! { <span class=emphasis.css_class()>{text}</span> }.into_view()
            }
        })
        .collect_view();

    view! {
        <div class="hero-content" style=move || motion.get().to_css()>
            <div class="hero-badge">
                <span class="hero-badge-dot"></span>
                {copy.badge}
            </div>

            <h1 class="hero-title">
                <span class="hero-title-lead">{copy.headline_lead}</span>
                <br/>
                <span class="hero-title-accent">{copy.headline_accent}</span>
            </h1>

            <p class="hero-description">{description}</p>

            <div class="hero-actions">
                {copy
                    .actions()
                    .into_iter()
                    .map(|action| view! { <ActionLink action=action/> })
                    .collect_view()}
            </div>
        </div>
    }
}
