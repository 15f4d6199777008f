//! Slide Lattice - paged title strips for swipeable content.
//!
//! A title strip is the scrollable row (or column) of tab-like titles paired
//! with a paged content area. This crate keeps the strip's scroll offset, its
//! selection indicator and the selected title in lockstep with the content
//! pager, both while the user drags between pages and when a transition
//! settles.
//!
//! # Example
//!
//! ```
//! use slide_lattice::prelude::*;
//!
//! let config = TitleStripConfig::default();
//! let strip = TitleStrip::from_config(&config, Size::new(300.0, 44.0));
//! let mut titles = TitleSlidableController::new(5, config.slide_direction, strip, |index| {
//!     LabelView::new(format!("Page {index}"), 100.0)
//! });
//!
//! // The pager is dragged a quarter of the way from page 0 to page 1.
//! if let Some(progress) = PageProgress::resolve(80.0, 320.0, 0, titles.count()) {
//!     titles.track(&progress);
//! }
//! assert_eq!(titles.surface().indicator().position, 25.0);
//!
//! // The drag settles on page 1.
//! titles.jump(1, false);
//! assert_eq!(titles.selected_index(), Some(1));
//! ```

pub mod animation;
pub mod config;
mod error;
pub mod pager;
pub mod prelude;
pub mod title;

pub use error::{ConfigError, ConfigResult};
pub use slide_lattice_core::*;
