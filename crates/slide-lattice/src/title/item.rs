//! A single entry of the title strip.

use slide_lattice_core::Signal;

use super::surface::TitleItemView;

/// Wraps one title view and tracks its position and selection state.
///
/// The controller owns its view. Its index is reassigned by the owning
/// [`TitleSlidableController`] whenever siblings are inserted or removed.
///
/// # Signals
///
/// - `did_select(usize)`: Emitted with the current index when the title is tapped
///
/// [`TitleSlidableController`]: super::TitleSlidableController
pub struct TitleItemController<V> {
    index: usize,
    is_selected: bool,
    view: V,

    /// Signal emitted when the title is tapped.
    pub did_select: Signal<usize>,
}

impl<V: TitleItemView> TitleItemController<V> {
    /// Wrap `view` at position `index`. The view starts unselected.
    pub fn new(index: usize, mut view: V) -> Self {
        view.set_selected(false);
        Self {
            index,
            is_selected: false,
            view,
            did_select: Signal::new(),
        }
    }

    /// Position of this title in the strip.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move this title to a new position.
    #[inline]
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Whether this title is the selected one.
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Select or deselect this title. The view's appearance is updated
    /// before this returns.
    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
        self.view.set_selected(selected);
    }

    /// The wrapped view.
    #[inline]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the wrapped view.
    #[inline]
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Report a tap on this title. Emits `did_select` and returns the index.
    pub fn tap(&self) -> usize {
        self.did_select.emit(self.index);
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::title::LabelView;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_selection_updates_view() {
        let mut item = TitleItemController::new(0, LabelView::new("Home", 80.0));
        assert!(!item.is_selected());
        assert!(!item.view().is_selected());

        item.set_selected(true);
        assert!(item.is_selected());
        assert!(item.view().is_selected());

        item.set_selected(false);
        assert!(!item.view().is_selected());
    }

    #[test]
    fn test_tap_reports_current_index() {
        let mut item = TitleItemController::new(1, LabelView::new("Inbox", 80.0));
        let tapped = Arc::new(AtomicUsize::new(usize::MAX));
        let tapped_clone = tapped.clone();
        item.did_select.connect(move |&index| {
            tapped_clone.store(index, Ordering::SeqCst);
        });

        item.set_index(4);
        assert_eq!(item.tap(), 4);
        assert_eq!(tapped.load(Ordering::SeqCst), 4);
    }
}
