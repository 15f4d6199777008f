//! Prelude module for Slide Lattice.
//!
//! ```ignore
//! use slide_lattice::prelude::*;
//! ```

pub use crate::config::TitleStripConfig;
pub use crate::pager::PageProgress;
pub use crate::title::{
    IndicatorState, LabelView, SelectionCompletion, ShiftMode, SlidableSurface, TitleItemController,
    TitleItemView, TitleSlidableController, TitleStrip,
};
pub use crate::{ConfigError, Point, Rect, Signal, Size, SlideDirection};
