//! Easing curves for scroll and indicator animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value so settles decelerate into place instead of stopping abruptly.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Available easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    #[default]
    EaseInOut,
    /// Cubic ease-out, close to a native scroll view's deceleration.
    EaseOutCubic,
    /// Sinusoidal ease-in-out.
    EaseInOutSine,
}

/// Apply an easing curve to a progress value.
///
/// `t` is clamped to `0.0..=1.0` before the curve is applied.
///
/// # Example
///
/// ```
/// use slide_lattice::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
    }
}

/// Interpolate between two values using an easing curve.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}
