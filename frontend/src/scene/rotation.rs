//! Per-frame tumble of the particle cloud.

use crate::config::{X_ROTATION_DIVISOR, Y_ROTATION_DIVISOR};

/// Accumulated X/Y rotation of the cloud, in radians.
///
/// Owned by a single frame callback; starts at zero on every mount.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
}

impl RotationState {
    /// Advance by `delta` seconds of wall-clock time.
    ///
    /// Negative and non-finite deltas are ignored so a bad timestamp can't
    /// spin the cloud backwards.
    pub fn advance(&mut self, delta: f64) {
        if !delta.is_finite() || delta <= 0.0 {
            return;
        }
        self.x -= delta / X_ROTATION_DIVISOR;
        self.y -= delta / Y_ROTATION_DIVISOR;
    }

    /// Back to the mount-time orientation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rotation_accumulates_deltas() {
        let deltas = [0.016, 0.017, 0.033, 0.5, 0.0001];
        let mut rotation = RotationState::default();
        for d in deltas {
            rotation.advance(d);
        }

        let total: f64 = deltas.iter().sum();
        assert!((rotation.x - (-total / 10.0)).abs() < EPS);
        assert!((rotation.y - (-total / 15.0)).abs() < EPS);
    }

    #[test]
    fn test_long_run_at_sixty_fps() {
        let mut rotation = RotationState::default();
        for _ in 0..600 {
            rotation.advance(1.0 / 60.0);
        }
        assert!((rotation.x + 1.0).abs() < 1e-9);
        assert!((rotation.y + 10.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_deltas_are_ignored() {
        let mut rotation = RotationState::default();
        rotation.advance(-1.0);
        rotation.advance(f64::NAN);
        rotation.advance(f64::INFINITY);
        rotation.advance(0.0);
        assert_eq!(rotation, RotationState::default());
    }

    #[test]
    fn test_reset() {
        let mut rotation = RotationState::default();
        rotation.advance(3.0);
        rotation.reset();
        assert_eq!(rotation, RotationState { x: 0.0, y: 0.0 });
    }
}
