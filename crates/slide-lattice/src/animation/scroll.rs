//! Animated scroll offsets.
//!
//! An [`OffsetAnimation`] moves a strip's content offset from where it was to
//! where a settle wants it. Progress is driven by the host's frame clock via
//! [`OffsetAnimation::advance`], never by wall time, so hosts (and tests)
//! control exactly when the strip moves.

use std::time::Duration;

use slide_lattice_core::Point;

use super::easing::{Easing, lerp_eased};

/// An in-flight animation between two content offsets.
#[derive(Debug, Clone)]
pub struct OffsetAnimation {
    from: Point,
    to: Point,
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
}

impl OffsetAnimation {
    /// Create an animation from `from` to `to` over `duration`.
    pub fn new(from: Point, to: Point, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            elapsed: Duration::ZERO,
        }
    }

    /// Offset the animation started from.
    #[inline]
    pub fn start(&self) -> Point {
        self.from
    }

    /// Offset the animation ends at.
    #[inline]
    pub fn target(&self) -> Point {
        self.to
    }

    /// Raw (un-eased) progress from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the animation has reached its target.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Current interpolated offset.
    pub fn current(&self) -> Point {
        let t = self.progress();
        Point::new(
            lerp_eased(self.easing, self.from.x, self.to.x, t),
            lerp_eased(self.easing, self.from.y, self.to.y, t),
        )
    }

    /// Advance the animation by one frame and return the new offset.
    pub fn advance(&mut self, delta: Duration) -> Point {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        self.current()
    }
}
