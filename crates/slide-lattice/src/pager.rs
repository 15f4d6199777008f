//! Drag progress reported by a content pager.
//!
//! A content pager knows its raw scroll offset and which page it rests on.
//! [`PageProgress::resolve`] turns that into the `(start, destination, ratio)`
//! triple the title strip is fed with during a drag.

use slide_lattice_core::logging::targets;

/// One sample of an in-progress page drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageProgress {
    /// Page the drag started from.
    pub start_index: usize,
    /// Adjacent page the drag is heading to.
    pub destination_index: usize,
    /// Signed fraction of a page travelled: positive forward, negative
    /// backward, within `-1.0..=1.0`.
    pub ratio: f32,
    /// Signed distance travelled from the start page, within one page.
    pub offset: f32,
    /// Length of one page along the slide axis.
    pub page_size: f32,
}

impl PageProgress {
    /// Resolve a pager's main-axis `content_offset` into drag progress.
    ///
    /// Returns `None` when the pager rests exactly on `current_index`, when
    /// `page_size` is not positive, or when the drag heads past the first or
    /// last page.
    pub fn resolve(
        content_offset: f32,
        page_size: f32,
        current_index: usize,
        page_count: usize,
    ) -> Option<Self> {
        if !(page_size > 0.0) || current_index >= page_count {
            return None;
        }

        let offset = (content_offset - current_index as f32 * page_size).clamp(-page_size, page_size);
        let destination_index = if offset > 0.0 {
            current_index + 1
        } else if offset < 0.0 {
            current_index.checked_sub(1)?
        } else {
            return None;
        };
        if destination_index >= page_count {
            tracing::trace!(target: targets::GESTURE, current_index, "drag past the last page");
            return None;
        }

        Some(Self {
            start_index: current_index,
            destination_index,
            ratio: offset / page_size,
            offset,
            page_size,
        })
    }

    /// Whether the drag moves towards higher indices.
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.destination_index > self.start_index
    }

    /// Page that would be selected if the drag were released now: the
    /// destination once more than half of it is showing.
    pub fn nearest_index(&self) -> usize {
        if self.ratio.abs() > 0.5 {
            self.destination_index
        } else {
            self.start_index
        }
    }
}
