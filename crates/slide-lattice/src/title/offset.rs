//! Target scroll offsets for the title strip.
//!
//! Given the geometry of the strip and the title that should be brought into
//! view, these functions return the scroll offset along the slide axis. Both
//! settles (`jump`) and drag interpolation (`shift`) are built on them.

use slide_lattice_core::{Rect, SlideDirection};

use super::surface::ShiftMode;

/// Strip geometry projected onto the slide axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisViewport {
    /// Visible length of the strip.
    pub visible: f32,
    /// Total length of the laid-out titles.
    pub content: f32,
    /// Current scroll offset.
    pub current: f32,
}

impl AxisViewport {
    /// Offset that aligns the end of the content with the end of the viewport.
    #[inline]
    pub fn trailing(&self) -> f32 {
        self.content - self.visible
    }

    /// Whether every title is visible without scrolling.
    #[inline]
    pub fn fits(&self) -> bool {
        self.visible >= self.content
    }
}

/// Compute the target offset for `index` under `mode`.
///
/// `frames` must hold one frame per title in display order. An index outside
/// `frames` leaves the strip where it is, so the current offset is returned.
pub fn target_offset(
    mode: ShiftMode,
    axis: SlideDirection,
    frames: &[Rect],
    index: usize,
    viewport: AxisViewport,
) -> f32 {
    match mode {
        ShiftMode::Paged => paged_offset(axis, frames, index, viewport),
        ShiftMode::Centered => centered_offset(axis, frames, index, viewport),
    }
}

fn paged_offset(axis: SlideDirection, frames: &[Rect], index: usize, viewport: AxisViewport) -> f32 {
    let Some(frame) = frames.get(index) else {
        return viewport.current;
    };

    if viewport.fits() || index == 0 {
        return 0.0;
    }

    // Close to the trailing edge: the titles from the one before `index` to
    // the end fit in the viewport.
    let remaining = (frames.len() - index + 1) as f32 * axis.extent(frame);
    if remaining <= viewport.visible {
        return viewport.trailing();
    }

    if index < 2 {
        return 0.0;
    }

    // Midpoint of the boundary between the two titles before `index`.
    (axis.origin(&frames[index - 1]) + axis.max_edge(&frames[index - 2])) / 2.0
}

fn centered_offset(
    axis: SlideDirection,
    frames: &[Rect],
    index: usize,
    viewport: AxisViewport,
) -> f32 {
    let Some(frame) = frames.get(index) else {
        return viewport.current;
    };

    let half_visible = viewport.visible / 2.0;
    let title_center = axis.center(frame);
    let centered = title_center - half_visible;

    if viewport.fits() {
        viewport.content / 2.0 - half_visible
    } else if title_center >= viewport.content / 2.0 {
        if viewport.content - title_center > half_visible {
            centered
        } else {
            viewport.trailing()
        }
    } else if title_center > half_visible {
        centered
    } else {
        0.0
    }
}
