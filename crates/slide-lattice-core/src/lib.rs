//! Core systems for Slide Lattice.
//!
//! This crate provides the foundational pieces shared by the title strip
//! components in `slide-lattice`:
//!
//! - **Signal/Slot System**: Type-safe notifications from controllers to the host
//! - **Geometry**: Points, sizes, rectangles and the slide axis that selects
//!   which coordinate drives offset math
//! - **Logging**: `tracing` target names used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use slide_lattice_core::Signal;
//!
//! // Create a signal that notifies when a page is selected
//! let page_selected = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = page_selected.connect(|index| {
//!     println!("Page {} selected", index);
//! });
//!
//! // Emit the signal
//! page_selected.emit(2);
//!
//! // Disconnect when done
//! page_selected.disconnect(conn_id);
//! ```
//!
//! # Geometry Example
//!
//! ```
//! use slide_lattice_core::{Rect, SlideDirection};
//!
//! let frame = Rect::new(100.0, 0.0, 80.0, 32.0);
//! let axis = SlideDirection::Horizontal;
//!
//! assert_eq!(axis.origin(&frame), 100.0);
//! assert_eq!(axis.extent(&frame), 80.0);
//! assert_eq!(axis.max_edge(&frame), 180.0);
//! ```

pub mod geometry;
pub mod logging;
pub mod signal;

pub use geometry::{Point, Rect, Size, SlideDirection};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
