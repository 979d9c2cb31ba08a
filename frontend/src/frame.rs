//! `requestAnimationFrame` loop with scoped registration.
//!
//! A [`FrameLoop`] owns its callback. Dropping it cancels the pending frame
//! and frees the closure, so nothing runs against a torn-down component.

use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::types::{AppError, AppResult};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Turns `requestAnimationFrame` timestamps into frame deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Seconds since the previous tick. The first tick yields 0 and the
    /// result is never negative.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_ms {
            Some(prev) => ((now_ms - prev) / 1000.0).max(0.0),
            None => 0.0,
        };
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
        delta
    }
}

/// Handle to a running animation-frame loop.
pub struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    /// Call `on_frame(delta_secs)` once per display frame until it returns
    /// `ControlFlow::Break` or the handle is dropped.
    pub fn start<F>(mut on_frame: F) -> AppResult<Self>
    where
        F: FnMut(f64) -> ControlFlow<()> + 'static,
    {
        let window =
            web_sys::window().ok_or_else(|| AppError::Environment("no global window".to_string()))?;

        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        // The closure reschedules itself through a weak handle; the only
        // strong reference lives in `FrameLoop`.
        let slot = Rc::downgrade(&callback);
        let loop_window = window.clone();
        let loop_pending = Rc::clone(&pending);
        let mut clock = FrameClock::default();

        let closure = Closure::wrap(Box::new(move |now_ms: f64| {
            loop_pending.set(None);
            if on_frame(clock.tick(now_ms)).is_break() {
                return;
            }
            let Some(slot) = slot.upgrade() else {
                return;
            };
            if let Some(cb) = slot.borrow().as_ref() {
                match request_frame(&loop_window, cb) {
                    Ok(id) => loop_pending.set(Some(id)),
                    Err(e) => log::warn!("Frame loop stopped: {}", e),
                }
            };
        }) as Box<dyn FnMut(f64)>);

        pending.set(Some(request_frame(&window, &closure)?));
        *callback.borrow_mut() = Some(closure);

        Ok(Self {
            window,
            pending,
            callback,
        })
    }

    /// Whether a frame is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        if let Ok(mut slot) = self.callback.try_borrow_mut() {
            slot.take();
        }
    }
}

fn request_frame(window: &Window, callback: &FrameCallback) -> AppResult<i32> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| AppError::Frame(format!("requestAnimationFrame failed: {:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(12_345.0), 0.0);
    }

    #[test]
    fn test_ticks_report_seconds() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        assert!((clock.tick(1016.0) - 0.016).abs() < 1e-12);
        assert!((clock.tick(1050.0) - 0.034).abs() < 1e-12);
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let mut clock = FrameClock::default();
        clock.tick(2000.0);
        assert_eq!(clock.tick(1500.0), 0.0);
        assert_eq!(clock.tick(f64::NAN), 0.0);
        // NaN did not poison the last timestamp
        assert!((clock.tick(1600.0) - 0.1).abs() < 1e-12);
    }
}
