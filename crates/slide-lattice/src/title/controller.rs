//! The title strip controller.
//!
//! [`TitleSlidableController`] keeps three things in lockstep while the user
//! pages through content: the strip's scroll offset, the selection indicator
//! and the selected title. The host pager feeds it in two ways:
//!
//! - **Continuously** during a drag, through [`shift`] and
//!   [`indicator_slide`] (or [`track`], which does both).
//! - **Discretely** when a page transition settles, through [`jump`].
//!
//! Taps on a title go the other way: the controller moves the indicator,
//! closes its offset gate and emits [`item_selected`] with a
//! [`SelectionCompletion`]. Until the host completes that token, drag updates
//! are dropped so the pager's own transition cannot fight the strip.
//!
//! # Example
//!
//! ```
//! use slide_lattice::title::{LabelView, SlidableSurface, TitleSlidableController, TitleStrip};
//! use slide_lattice::{Size, SlideDirection};
//!
//! let strip = TitleStrip::new(SlideDirection::Horizontal, Size::new(300.0, 44.0));
//! let mut titles = TitleSlidableController::new(5, SlideDirection::Horizontal, strip, |index| {
//!     LabelView::new(format!("Page {index}"), 100.0)
//! });
//!
//! titles.item_selected.connect(|(_index, completion)| {
//!     // Start the content transition to the tapped page, then:
//!     completion.complete();
//! });
//!
//! titles.jump(3, false);
//! assert_eq!(titles.selected_index(), Some(3));
//! assert_eq!(titles.surface().content_offset().x, 200.0);
//! ```
//!
//! [`shift`]: TitleSlidableController::shift
//! [`indicator_slide`]: TitleSlidableController::indicator_slide
//! [`track`]: TitleSlidableController::track
//! [`jump`]: TitleSlidableController::jump
//! [`item_selected`]: TitleSlidableController::item_selected

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use slide_lattice_core::logging::targets;
use slide_lattice_core::{Rect, Signal, SlideDirection};

use super::item::TitleItemController;
use super::offset::{self, AxisViewport};
use super::surface::{SlidableSurface, TitleItemView};
use crate::pager::PageProgress;

/// Token handed out with every tap-initiated selection.
///
/// The host calls [`complete`](Self::complete) once its own page transition
/// has finished. Until then the controller ignores [`shift`] calls. Tokens
/// are cheap to clone and may be completed more than once.
///
/// [`shift`]: TitleSlidableController::shift
#[derive(Debug, Clone)]
pub struct SelectionCompletion {
    gate: Arc<AtomicBool>,
}

impl SelectionCompletion {
    /// Re-enable continuous offset updates.
    pub fn complete(&self) {
        self.gate.store(true, Ordering::SeqCst);
        tracing::trace!(target: targets::TITLE, "selection completed, offset changes allowed");
    }
}

type ViewFactory<V> = Box<dyn FnMut(usize) -> V>;

/// Owns the title items and the strip surface, and coordinates offsets,
/// indicator and selection.
///
/// # Signals
///
/// - `item_selected((usize, SelectionCompletion))`: Emitted when a title is tapped
/// - `layout_completed(())`: Emitted after every relayout of the strip
pub struct TitleSlidableController<S: SlidableSurface> {
    /// Strip surface.
    surface: S,

    /// Title items in display order; `items[i].index() == i`.
    items: Vec<TitleItemController<S::View>>,

    /// Creates the view for a new title at the given index.
    factory: ViewFactory<S::View>,

    /// Axis that drives all offset math, taken from the surface.
    slide_direction: SlideDirection,

    /// Currently selected title.
    selected_index: Option<usize>,

    /// Closed while a tapped selection waits for its page transition.
    offset_change_allowed: Arc<AtomicBool>,

    /// Whether taps select titles.
    selection_allowed: bool,

    /// Signal emitted when a title is tapped.
    pub item_selected: Signal<(usize, SelectionCompletion)>,

    /// Signal emitted after the surface lays out its titles.
    pub layout_completed: Signal<()>,
}

impl<S: SlidableSurface> TitleSlidableController<S> {
    /// Create a controller with `pages_count` titles.
    ///
    /// `factory` builds the view for each new title from its index. The first
    /// title is selected when there is one.
    ///
    /// The surface lays the titles out, so its axis is the one used for all
    /// offset and indicator math. A `slide_direction` that disagrees with it
    /// is logged and overridden.
    pub fn new<F>(pages_count: usize, slide_direction: SlideDirection, surface: S, factory: F) -> Self
    where
        F: FnMut(usize) -> S::View + 'static,
    {
        let surface_direction = surface.slide_direction();
        if surface_direction != slide_direction {
            tracing::warn!(
                target: targets::TITLE,
                requested = ?slide_direction,
                surface = ?surface_direction,
                "slide direction differs from the surface, using the surface's"
            );
        }
        let slide_direction = surface_direction;

        let mut controller = Self {
            surface,
            items: Vec::new(),
            factory: Box::new(factory),
            slide_direction,
            selected_index: None,
            offset_change_allowed: Arc::new(AtomicBool::new(true)),
            selection_allowed: true,
            item_selected: Signal::new(),
            layout_completed: Signal::new(),
        };
        if pages_count > 0 {
            controller.append(pages_count);
        }
        controller.select(0);
        controller
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of titles.
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the strip has no titles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the selected title, if any.
    #[inline]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// The title at `index`.
    pub fn item(&self, index: usize) -> Option<&TitleItemController<S::View>> {
        self.items.get(index)
    }

    /// All titles in display order.
    pub fn items(&self) -> &[TitleItemController<S::View>] {
        &self.items
    }

    /// The strip surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the strip surface, e.g. to drive its animations or
    /// resize it. Call [`relayout`](Self::relayout) after a resize.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Axis the strip slides along.
    #[inline]
    pub fn slide_direction(&self) -> SlideDirection {
        self.slide_direction
    }

    /// Whether drag updates currently move the strip.
    pub fn is_offset_change_allowed(&self) -> bool {
        self.offset_change_allowed.load(Ordering::SeqCst)
    }

    /// Whether taps select titles.
    #[inline]
    pub fn is_selection_allowed(&self) -> bool {
        self.selection_allowed
    }

    /// Enable or disable tap selection. Programmatic jumps are unaffected.
    pub fn set_selection_allowed(&mut self, allowed: bool) {
        self.selection_allowed = allowed;
    }

    /// Builder-style variant of [`set_selection_allowed`](Self::set_selection_allowed).
    pub fn with_selection_allowed(mut self, allowed: bool) -> Self {
        self.selection_allowed = allowed;
        self
    }

    // =========================================================================
    // Title Management
    // =========================================================================

    /// Append `count` titles after the existing ones.
    pub fn append(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let start = self.items.len();
        for index in start..start + count {
            let view = (self.factory)(index);
            self.items.push(TitleItemController::new(index, view));
        }
        tracing::debug!(target: targets::TITLE, start, count, "appended titles");

        self.surface.append_views(count);
        self.relayout();
    }

    /// Insert a title at `index`.
    ///
    /// Indices past the end are clamped, so the title is appended. Returns the
    /// index the title was inserted at. A selected title keeps its selection
    /// and moves with the insertion.
    pub fn insert(&mut self, index: usize) -> usize {
        let index = index.min(self.items.len());
        for item in &mut self.items[index..] {
            item.set_index(item.index() + 1);
        }
        let view = (self.factory)(index);
        self.items.insert(index, TitleItemController::new(index, view));

        if let Some(selected) = self.selected_index
            && selected >= index
        {
            self.selected_index = Some(selected + 1);
        }
        tracing::debug!(target: targets::TITLE, index, count = self.items.len(), "inserted title");

        self.surface.insert_view(index);
        self.relayout();
        index
    }

    /// Remove the title at `index`.
    ///
    /// Titles after it move up by one. Removing the selected title clears the
    /// selection and collapses the indicator to zero size at the leading
    /// edge; removing a title before it keeps the same title selected at its
    /// new index.
    pub fn remove_at(&mut self, index: usize) {
        if index >= self.items.len() {
            tracing::trace!(target: targets::TITLE, index, count = self.items.len(), "remove ignored, index out of range");
            return;
        }
        self.items.remove(index);
        for item in &mut self.items[index..] {
            item.set_index(item.index() - 1);
        }

        let removed_selected = self.selected_index == Some(index);
        self.selected_index = match self.selected_index {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        tracing::debug!(target: targets::TITLE, index, count = self.items.len(), "removed title");

        if removed_selected {
            self.surface.set_indicator(0.0, 0.0, false);
        }

        self.surface.remove_view(index);
        self.relayout();
    }

    /// Ask the surface to lay out all titles again.
    ///
    /// Runs after every structural change. Hosts call it after resizing the
    /// surface. The indicator follows the selected title and
    /// `layout_completed` is emitted.
    pub fn relayout(&mut self) {
        let mut views: Vec<&mut S::View> = self.items.iter_mut().map(|item| item.view_mut()).collect();
        self.surface.layout_views(&mut views);

        if let Some(selected) = self.selected_index {
            self.update_indicator(selected, false);
        }
        self.layout_completed.emit(());
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Mark `index` as the selected title.
    ///
    /// State only: neither the indicator nor the scroll offset move. Does
    /// nothing for an invalid index or the already selected title.
    pub fn select(&mut self, index: usize) {
        if index >= self.items.len() || self.selected_index == Some(index) {
            return;
        }
        if let Some(previous) = self.selected_index
            && let Some(item) = self.items.get_mut(previous)
        {
            item.set_selected(false);
        }
        self.selected_index = Some(index);
        self.items[index].set_selected(true);
    }

    /// Route a tap on the title at `index`.
    ///
    /// Ignored while selection is disallowed or for an invalid index.
    /// Otherwise the title's `did_select` fires, the indicator moves to the
    /// title, and `item_selected` is emitted with a completion token. When
    /// anyone listens to `item_selected`, drag updates are dropped until the
    /// token is completed.
    pub fn tap_item(&mut self, index: usize) {
        if !self.selection_allowed {
            tracing::trace!(target: targets::TITLE, index, "tap ignored, selection not allowed");
            return;
        }
        let Some(item) = self.items.get(index) else {
            tracing::trace!(target: targets::TITLE, index, "tap ignored, index out of range");
            return;
        };
        item.tap();

        let animated = self.surface.should_animate_indicator_on_selection(index);
        self.update_indicator(index, animated);

        if self.item_selected.connection_count() > 0 && !self.item_selected.is_blocked() {
            self.offset_change_allowed.store(false, Ordering::SeqCst);
        }
        tracing::debug!(target: targets::TITLE, index, "title tapped");

        let completion = SelectionCompletion {
            gate: Arc::clone(&self.offset_change_allowed),
        };
        self.item_selected.emit((index, completion));
    }

    /// Settle on the title at `index`.
    ///
    /// Selects it, moves the indicator onto it and scrolls the strip to its
    /// target offset. Does nothing for an invalid index.
    pub fn jump(&mut self, index: usize, animated: bool) {
        if index >= self.items.len() {
            tracing::trace!(target: targets::TITLE, index, "jump ignored, index out of range");
            return;
        }
        self.select(index);

        let animate_indicator = animated && self.surface.should_animate_indicator_on_selection(index);
        self.update_indicator(index, animate_indicator);

        let target = self.target_offset(index);
        tracing::debug!(target: targets::TITLE, index, animated, target, "jump");
        self.surface
            .set_content_offset(self.slide_direction.point(target), animated);
    }

    // =========================================================================
    // Continuous Gesture Feed
    // =========================================================================

    /// Interpolate the strip offset while the pager is dragged from
    /// `start_index` towards `destination_index`.
    ///
    /// `ratio` is the drag progress; negative values (a backward drag measured
    /// from the destination) are folded into forward progress as `1 + ratio`.
    /// Dropped while a tapped selection is pending or for invalid indices.
    pub fn shift(&mut self, ratio: f32, start_index: usize, destination_index: usize) {
        if !self.is_offset_change_allowed() {
            tracing::trace!(target: targets::GESTURE, "shift dropped, selection pending");
            return;
        }
        if start_index >= self.items.len() || destination_index >= self.items.len() {
            tracing::trace!(target: targets::GESTURE, start_index, destination_index, "shift ignored, index out of range");
            return;
        }

        let frames = self.frames();
        let viewport = self.viewport();
        let mode = self.surface.shift_mode();
        let axis = self.slide_direction;
        let target_offset = offset::target_offset(mode, axis, &frames, destination_index, viewport);
        let start_offset = offset::target_offset(mode, axis, &frames, start_index, viewport);

        let total_shift = start_offset - target_offset;
        let normalized_ratio = if ratio < 0.0 { 1.0 + ratio } else { ratio };
        let shift = normalized_ratio * total_shift;
        let position = start_offset.min(target_offset) + shift.abs();

        tracing::trace!(target: targets::GESTURE, ratio, start_index, destination_index, position, "shift");
        self.surface.set_content_offset(axis.point(position), false);
    }

    /// Interpolate the indicator while the pager is dragged.
    ///
    /// `offset` is how far the pager has moved from the start page and
    /// `page_size` the length of one page. Position moves by the unsigned
    /// distance between the two titles scaled by `offset / page_size`; size
    /// blends from the start title's extent to the destination's. Does
    /// nothing for invalid indices or a non-positive page size.
    pub fn indicator_slide(
        &mut self,
        offset: f32,
        page_size: f32,
        start_index: usize,
        destination_index: usize,
    ) {
        let (Some(start), Some(destination)) =
            (self.items.get(start_index), self.items.get(destination_index))
        else {
            tracing::trace!(target: targets::GESTURE, start_index, destination_index, "indicator slide ignored, index out of range");
            return;
        };
        if !(page_size > 0.0) {
            tracing::trace!(target: targets::GESTURE, page_size, "indicator slide ignored, empty page");
            return;
        }

        let axis = self.slide_direction;
        let start_frame = start.view().frame();
        let destination_frame = destination.view().frame();
        let multiplier = offset / page_size;

        let start_position = axis.origin(&start_frame);
        let destination_position = axis.origin(&destination_frame);
        let position = start_position + multiplier * (destination_position - start_position).abs();

        let start_size = axis.extent(&start_frame);
        let destination_size = axis.extent(&destination_frame);
        let size = start_size + multiplier.abs() * (destination_size - start_size);

        self.surface.set_indicator(size, position, false);
    }

    /// Feed one pager progress sample to both [`shift`](Self::shift) and
    /// [`indicator_slide`](Self::indicator_slide).
    pub fn track(&mut self, progress: &PageProgress) {
        self.shift(progress.ratio, progress.start_index, progress.destination_index);
        self.indicator_slide(
            progress.offset,
            progress.page_size,
            progress.start_index,
            progress.destination_index,
        );
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Offset along the slide axis that brings `index` into view under the
    /// surface's shift mode. An invalid index yields the current offset.
    pub fn target_offset(&self, index: usize) -> f32 {
        offset::target_offset(
            self.surface.shift_mode(),
            self.slide_direction,
            &self.frames(),
            index,
            self.viewport(),
        )
    }

    fn frames(&self) -> Vec<Rect> {
        self.items.iter().map(|item| item.view().frame()).collect()
    }

    fn viewport(&self) -> AxisViewport {
        let axis = self.slide_direction;
        AxisViewport {
            visible: axis.length(self.surface.visible_size()),
            content: axis.length(self.surface.content_size()),
            current: axis.coordinate(self.surface.content_offset()),
        }
    }

    fn update_indicator(&mut self, index: usize, animated: bool) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        let frame = item.view().frame();
        let axis = self.slide_direction;
        self.surface
            .set_indicator(axis.extent(&frame), axis.origin(&frame), animated);
    }
}
