//! Animation support for Slide Lattice.
//!
//! This module provides easing functions and the scroll-offset animation used
//! when a title strip settles on a page.
//!
//! # Easing Functions
//!
//! Easing functions control the rate of change during animations. They take a
//! normalized progress value `t` (0.0 to 1.0) and return a transformed value.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use slide_lattice::animation::{Easing, OffsetAnimation};
//! use slide_lattice::Point;
//!
//! let mut animation = OffsetAnimation::new(
//!     Point::ZERO,
//!     Point::new(200.0, 0.0),
//!     Duration::from_millis(200),
//!     Easing::Linear,
//! );
//! let halfway = animation.advance(Duration::from_millis(100));
//! assert_eq!(halfway, Point::new(100.0, 0.0));
//! ```

mod easing;
mod scroll;

pub use easing::{Easing, ease, lerp_eased};
pub use scroll::OffsetAnimation;
