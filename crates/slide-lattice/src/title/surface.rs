//! Host capabilities consumed by the title strip controllers.
//!
//! The controllers never draw or lay anything out themselves. A host toolkit
//! provides a scrollable surface for the strip ([`SlidableSurface`]) and a
//! view type for each title ([`TitleItemView`]); the controllers only read
//! geometry back and write offsets, indicator positions and selection state.

use serde::{Deserialize, Serialize};
use slide_lattice_core::{Point, Rect, Size, SlideDirection};

/// How the strip scrolls a selected title into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftMode {
    /// Snap-to-page scrolling: leading edge, trailing edge, or the boundary
    /// between the two titles before the selected one.
    #[default]
    Paged,
    /// Keep the selected title as close to the middle of the strip as the
    /// scroll range allows.
    Centered,
}

/// A single title view owned by a [`TitleItemController`].
///
/// [`TitleItemController`]: super::TitleItemController
pub trait TitleItemView {
    /// Current frame in strip content coordinates.
    fn frame(&self) -> Rect;

    /// Place the view. Called by the surface during layout.
    fn set_frame(&mut self, frame: Rect);

    /// Switch between selected and unselected appearance.
    fn set_selected(&mut self, selected: bool);

    /// Preferred size. Surfaces that size titles to their content lay the
    /// view out with this, before any frame has been assigned.
    fn size_hint(&self) -> Size;
}

/// The scrollable container that holds the title views and the indicator.
pub trait SlidableSurface {
    /// View type placed in this surface.
    type View: TitleItemView;

    /// Axis the views are laid out and scrolled along. Must not change over
    /// the surface's lifetime.
    fn slide_direction(&self) -> SlideDirection;

    /// Current scroll offset.
    fn content_offset(&self) -> Point;

    /// Scroll to `offset`. A new call replaces any scroll still animating.
    fn set_content_offset(&mut self, offset: Point, animated: bool);

    /// Total size of the laid-out titles.
    fn content_size(&self) -> Size;

    /// Size of the visible viewport.
    fn visible_size(&self) -> Size;

    /// `count` views were appended after the existing ones.
    fn append_views(&mut self, count: usize) {
        let _ = count;
    }

    /// A view was inserted at `index`.
    fn insert_view(&mut self, index: usize) {
        let _ = index;
    }

    /// The view at `index` was removed.
    fn remove_view(&mut self, index: usize) {
        let _ = index;
    }

    /// Lay out every view, in display order, and update the content size.
    fn layout_views(&mut self, views: &mut [&mut Self::View]);

    /// Move the selection indicator. `position` and `size` are measured along
    /// the slide axis.
    fn set_indicator(&mut self, size: f32, position: f32, animated: bool);

    /// Scroll policy used for target offsets.
    fn shift_mode(&self) -> ShiftMode {
        ShiftMode::Paged
    }

    /// Whether selecting `index` should animate the indicator.
    fn should_animate_indicator_on_selection(&self, index: usize) -> bool {
        let _ = index;
        true
    }
}
