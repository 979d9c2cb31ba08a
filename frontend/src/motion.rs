//! One-shot entrance transition.
//!
//! The hero's foreground content fades in and slides up once per mount:
//!
//! ```text
//! NotStarted ──start()──▶ Animating { started_at } ──t ≥ duration──▶ Settled
//! ```
//!
//! `start` is a no-op once the transition has left `NotStarted`, so a
//! re-render can never replay it.

use crate::config::{ENTRANCE_DURATION_SECS, ENTRANCE_OFFSET_Y};

// =============================================================================
// Easing
// =============================================================================

/// CSS-style cubic bezier timing function with fixed end points (0,0) and (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `t` in `[0, 1]`.
    pub fn apply(&self, t: f64) -> f64 {
        const EPS: f64 = 1e-7;

        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        // Newton first; it converges in a handful of steps away from flat
        // spots.
        let mut s = t;
        for _ in 0..8 {
            let err = bezier(self.x1, self.x2, s) - t;
            if err.abs() < EPS {
                return bezier(self.y1, self.y2, s);
            }
            let slope = bezier_slope(self.x1, self.x2, s);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= err / slope;
        }

        // Bisection fallback
        let (mut lo, mut hi) = (0.0, 1.0);
        s = t;
        for _ in 0..64 {
            let x = bezier(self.x1, self.x2, s);
            if (x - t).abs() < EPS {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = 0.5 * (lo + hi);
        }
        bezier(self.y1, self.y2, s)
    }
}

fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * s + b) * s + c) * s
}

fn bezier_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * s + 2.0 * b) * s + c
}

// =============================================================================
// Entrance
// =============================================================================

/// Animated properties of the foreground block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionStyle {
    pub opacity: f64,
    /// Downward offset in CSS pixels.
    pub offset_y: f64,
}

impl MotionStyle {
    pub const RESTING: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Inline CSS for the animated block.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px);",
            self.opacity, self.offset_y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntrancePhase {
    NotStarted,
    Animating { started_at: f64 },
    Settled,
}

/// Fade-and-rise transition, played at most once.
#[derive(Clone, Copy, Debug)]
pub struct Entrance {
    phase: EntrancePhase,
    duration: f64,
    offset_y: f64,
    easing: CubicBezier,
}

impl Entrance {
    pub fn new(duration: f64, offset_y: f64, easing: CubicBezier) -> Self {
        Self {
            phase: EntrancePhase::NotStarted,
            duration,
            offset_y,
            easing,
        }
    }

    /// The hero's entrance: 0.8 s, 20 px rise, ease-in-out.
    pub fn hero() -> Self {
        Self::new(
            ENTRANCE_DURATION_SECS,
            ENTRANCE_OFFSET_Y,
            CubicBezier::EASE_IN_OUT,
        )
    }

    pub fn phase(&self) -> EntrancePhase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == EntrancePhase::Settled
    }

    /// Style before the transition begins.
    pub fn initial_style(&self) -> MotionStyle {
        MotionStyle {
            opacity: 0.0,
            offset_y: self.offset_y,
        }
    }

    /// Begin at time `now` (seconds). Returns false if already started.
    pub fn start(&mut self, now: f64) -> bool {
        if self.phase != EntrancePhase::NotStarted {
            return false;
        }
        self.phase = EntrancePhase::Animating { started_at: now };
        true
    }

    /// Style at time `now`, settling once the duration has elapsed.
    pub fn advance(&mut self, now: f64) -> MotionStyle {
        match self.phase {
            EntrancePhase::NotStarted => self.initial_style(),
            EntrancePhase::Settled => MotionStyle::RESTING,
            EntrancePhase::Animating { started_at } => {
                let t = if self.duration > 0.0 {
                    ((now - started_at) / self.duration).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                if t >= 1.0 {
                    self.phase = EntrancePhase::Settled;
                    return MotionStyle::RESTING;
                }
                let eased = self.easing.apply(t);
                MotionStyle {
                    opacity: eased,
                    offset_y: self.offset_y * (1.0 - eased),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_ease_in_out_endpoints_and_symmetry() {
        let ease = CubicBezier::EASE_IN_OUT;
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert!((ease.apply(0.5) - 0.5).abs() < EPS);
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!((ease.apply(t) + ease.apply(1.0 - t) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_ease_is_monotonic() {
        let ease = CubicBezier::EASE_IN_OUT;
        let mut prev = 0.0;
        for i in 1..=100 {
            let y = ease.apply(i as f64 / 100.0);
            assert!(y >= prev);
            prev = y;
        }
        // Slow start
        assert!(ease.apply(0.1) < 0.1);
    }

    #[test]
    fn test_linear_is_identity() {
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            assert!((CubicBezier::LINEAR.apply(t) - t).abs() < 1e-5);
        }
    }

    #[test]
    fn test_hero_entrance_runs_from_hidden_to_resting() {
        let mut entrance = Entrance::hero();
        assert_eq!(
            entrance.initial_style(),
            MotionStyle {
                opacity: 0.0,
                offset_y: 20.0
            }
        );

        assert!(entrance.start(0.0));
        let begin = entrance.advance(0.0);
        assert_eq!(begin.opacity, 0.0);
        assert_eq!(begin.offset_y, 20.0);

        let mid = entrance.advance(0.4);
        assert!((mid.opacity - 0.5).abs() < EPS);
        assert!((mid.offset_y - 10.0).abs() < 1e-4);
        assert!(!entrance.is_settled());

        let end = entrance.advance(0.8);
        assert_eq!(end, MotionStyle::RESTING);
        assert!(entrance.is_settled());
    }

    #[test]
    fn test_entrance_does_not_replay() {
        let mut entrance = Entrance::hero();
        assert!(entrance.start(1.0));
        assert!(!entrance.start(1.5));
        assert_eq!(entrance.phase(), EntrancePhase::Animating { started_at: 1.0 });

        entrance.advance(5.0);
        assert!(!entrance.start(6.0));
        assert_eq!(entrance.advance(6.0), MotionStyle::RESTING);
        assert_eq!(entrance.phase(), EntrancePhase::Settled);
    }

    #[test]
    fn test_unstarted_entrance_holds_initial_style() {
        let mut entrance = Entrance::hero();
        assert_eq!(entrance.advance(10.0), entrance.initial_style());
        assert_eq!(entrance.phase(), EntrancePhase::NotStarted);
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let mut entrance = Entrance::new(0.0, 20.0, CubicBezier::LINEAR);
        entrance.start(0.0);
        assert_eq!(entrance.advance(0.0), MotionStyle::RESTING);
        assert!(entrance.is_settled());
    }

    #[test]
    fn test_css_output() {
        let css = MotionStyle {
            opacity: 0.5,
            offset_y: 10.0,
        }
        .to_css();
        assert_eq!(css, "opacity: 0.500; transform: translateY(10.00px);");
    }
}
