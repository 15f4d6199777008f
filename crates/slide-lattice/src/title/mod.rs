//! Title strip components.
//!
//! - [`TitleItemController`]: one title, its index and selected state
//! - [`TitleSlidableController`]: the ordered titles, the strip surface and
//!   the offset/indicator coordination
//! - [`SlidableSurface`] and [`TitleItemView`]: capabilities a host toolkit
//!   provides
//! - [`TitleStrip`] and [`LabelView`]: headless implementations of those
//!   capabilities

mod controller;
mod item;
mod label;
pub mod offset;
mod strip;
mod surface;

pub use controller::{SelectionCompletion, TitleSlidableController};
pub use item::TitleItemController;
pub use label::LabelView;
pub use strip::{IndicatorState, TitleStrip};
pub use surface::{ShiftMode, SlidableSurface, TitleItemView};
