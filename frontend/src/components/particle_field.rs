//! Animated particle field layer.
//!
//! Samples the point cloud, attaches a [`CanvasSurface`] once the canvas is
//! in the DOM and drives the tumble from a [`FrameLoop`]. The loop is
//! released in `on_cleanup`; if the surface can't be created the layer
//! reports [`SurfaceState::Unavailable`] and the rest of the hero carries on.

use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

use leptos::*;
use web_sys::HtmlCanvasElement;

use crate::frame::FrameLoop;
use crate::scene::{particle_field_scene, CanvasSurface, PointCloud, RotationState};
use crate::types::{AppResult, SurfaceState};

/// Attach the surface and start the per-frame update.
fn start_particle_loop(canvas: HtmlCanvasElement) -> AppResult<FrameLoop> {
    let surface = CanvasSurface::attach(canvas)?;
    let cloud = Rc::new(PointCloud::generate());
    let mut rotation = RotationState::default();

    log::debug!("Particle field: {} points", cloud.len());

    FrameLoop::start(move |delta| {
        rotation.advance(delta);
        surface.render(&particle_field_scene(Rc::clone(&cloud), rotation));
        ControlFlow::Continue(())
    })
}

#[component]
pub fn ParticleField(
    /// Surface lifecycle, read by the hero's layer table
    set_surface: WriteSignal<SurfaceState>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let running: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
    let disposed = Rc::new(Cell::new(false));

    {
        let running = Rc::clone(&running);
        let disposed = Rc::clone(&disposed);
        on_cleanup(move || {
            disposed.set(true);
            if running.borrow_mut().take().is_some() {
                log::debug!("Particle field frame loop released");
            }
        });
    }

    canvas_ref.on_load(move |canvas| {
        if disposed.get() {
            return;
        }
        let canvas: HtmlCanvasElement = (*canvas).clone();
        match start_particle_loop(canvas) {
            Ok(frame_loop) => {
                *running.borrow_mut() = Some(frame_loop);
                set_surface.set(SurfaceState::Live);
                log::info!("✨ Particle field running");
            }
            Err(e) => {
                log::warn!("Particle field disabled: {}", e);
                set_surface.set(SurfaceState::Unavailable);
            }
        }
    });

    view! {
        <canvas node_ref=canvas_ref class="particle-canvas"></canvas>
    }
}
