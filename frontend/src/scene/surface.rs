//! Canvas 2D rendering surface for the particle scene.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::camera::{Camera, Viewport};
use super::graph::SceneNode;
use crate::types::{AppError, AppResult};

/// Smallest dot we bother drawing, in device pixels. Anything thinner
/// vanishes under canvas antialiasing.
const MIN_DOT_PX: f64 = 0.75;

/// Backing-store size in device pixels for a CSS box of `client_width` x
/// `client_height` at pixel `ratio`.
pub fn backing_size(client_width: i32, client_height: i32, ratio: f64) -> Viewport {
    let ratio = if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    };
    Viewport::new(
        (client_width.max(0) as f64 * ratio).round(),
        (client_height.max(0) as f64 * ratio).round(),
    )
}

/// Last measured viewport. Marked stale on window resize so the element's
/// layout is only read when it may have changed.
#[derive(Debug)]
pub struct ViewportCache {
    stale: Cell<bool>,
    current: Cell<Viewport>,
}

impl Default for ViewportCache {
    fn default() -> Self {
        Self {
            stale: Cell::new(true),
            current: Cell::new(Viewport::new(0.0, 0.0)),
        }
    }
}

impl ViewportCache {
    pub fn invalidate(&self) {
        self.stale.set(true);
    }

    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    /// Cached viewport, re-measured with `measure` only when stale.
    pub fn get_or_measure(&self, measure: impl FnOnce() -> Viewport) -> Viewport {
        if self.stale.replace(false) {
            self.current.set(measure());
        }
        self.current.get()
    }
}

/// A canvas with an acquired 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    camera: Camera,
    viewport: Rc<ViewportCache>,
    window: Option<Window>,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    ///
    /// Fails when the host has no canvas support; callers are expected to
    /// hide the particle layer rather than abort.
    pub fn attach(canvas: HtmlCanvasElement) -> AppResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| AppError::Surface(format!("getContext failed: {:?}", e)))?
            .ok_or_else(|| AppError::Surface("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Surface("unexpected context type".to_string()))?;

        let viewport = Rc::new(ViewportCache::default());
        let window = web_sys::window();
        let on_resize = window.as_ref().and_then(|window| {
            let cache = Rc::clone(&viewport);
            let closure = Closure::wrap(Box::new(move || cache.invalidate()) as Box<dyn FnMut()>);
            match window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            {
                Ok(()) => Some(closure),
                Err(e) => {
                    // Without the listener the first measurement is kept.
                    log::warn!("resize listener not installed: {:?}", e);
                    None
                }
            }
        });

        Ok(Self {
            canvas,
            ctx,
            camera: Camera::default(),
            viewport,
            window,
            on_resize,
        })
    }

    /// Match the backing store to the element's CSS size times the device
    /// pixel ratio. Layout is only read after a resize.
    fn fit_to_display(&self) -> Viewport {
        let viewport = self.viewport.get_or_measure(|| {
            let ratio = self
                .window
                .as_ref()
                .map(|w| w.device_pixel_ratio())
                .unwrap_or(1.0);
            backing_size(self.canvas.client_width(), self.canvas.client_height(), ratio)
        });

        if self.canvas.width() != viewport.width as u32 {
            self.canvas.set_width(viewport.width as u32);
        }
        if self.canvas.height() != viewport.height as u32 {
            self.canvas.set_height(viewport.height as u32);
        }
        viewport
    }

    /// Clear and draw one frame of `scene`.
    pub fn render(&self, scene: &SceneNode) {
        let viewport = self.fit_to_display();
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

        scene.visit_points(&mut |view| {
            if !self.camera.should_draw(&view) {
                return;
            }
            set_fill_style(&self.ctx, view.material.color);
            let alpha = if view.material.transparent {
                view.material.opacity as f64
            } else {
                1.0
            };
            self.ctx.set_global_alpha(alpha);

            for point in view.cloud.iter() {
                let Some(dot) = self.camera.project(view.world * *point, viewport, view.material)
                else {
                    continue;
                };
                let size = dot.size.max(MIN_DOT_PX);
                self.ctx
                    .fill_rect(dot.x - size * 0.5, dot.y - size * 0.5, size, size);
            }
        });

        self.ctx.set_global_alpha(1.0);
    }
}

impl Drop for CanvasSurface {
    fn drop(&mut self) {
        if let (Some(window), Some(closure)) = (self.window.as_ref(), self.on_resize.take()) {
            let _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}

fn set_fill_style(ctx: &CanvasRenderingContext2d, value: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(value),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backing_size_scales_by_pixel_ratio() {
        assert_eq!(backing_size(800, 600, 2.0), Viewport::new(1600.0, 1200.0));
        assert_eq!(backing_size(101, 51, 1.5), Viewport::new(152.0, 77.0));
    }

    #[test]
    fn test_backing_size_guards_bad_input() {
        assert_eq!(backing_size(-5, 10, 1.0), Viewport::new(0.0, 10.0));
        assert_eq!(backing_size(10, 10, f64::NAN), Viewport::new(10.0, 10.0));
        assert_eq!(backing_size(10, 10, 0.0), Viewport::new(10.0, 10.0));
    }

    #[test]
    fn test_viewport_measured_once_until_resize() {
        let cache = ViewportCache::default();
        let measured = Cell::new(0);
        let measure = |w: f64| {
            measured.set(measured.get() + 1);
            Viewport::new(w, 100.0)
        };

        assert!(cache.is_stale());
        assert_eq!(cache.get_or_measure(|| measure(300.0)).width, 300.0);
        for _ in 0..10 {
            assert_eq!(cache.get_or_measure(|| measure(999.0)).width, 300.0);
        }
        assert_eq!(measured.get(), 1);

        cache.invalidate();
        assert_eq!(cache.get_or_measure(|| measure(640.0)).width, 640.0);
        assert_eq!(measured.get(), 2);
        assert!(!cache.is_stale());
    }
}
