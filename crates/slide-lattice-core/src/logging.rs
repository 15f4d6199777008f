//! Logging facilities for Slide Lattice.
//!
//! Slide Lattice uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("slide_lattice=debug")
//!         .init();
//!
//!     // Build title strips here...
//! }
//! ```
//!
//! Structural changes and settles log at `debug`. Gesture feeds arrive at
//! frame rate, so they and any ignored out-of-range calls log at `trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "slide_lattice_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "slide_lattice_core::signal";
    /// Title strip controllers target.
    pub const TITLE: &str = "slide_lattice::title";
    /// Continuous gesture feed (shift, indicator slide, page progress).
    pub const GESTURE: &str = "slide_lattice::gesture";
    /// Strip surface and scroll animation target.
    pub const STRIP: &str = "slide_lattice::strip";
    /// Configuration loading target.
    pub const CONFIG: &str = "slide_lattice::config";
}
