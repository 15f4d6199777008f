//! A headless text title.

use slide_lattice_core::{Rect, Size};

use super::surface::TitleItemView;

/// A title view that carries a text label and a preferred extent.
///
/// `LabelView` holds no drawing state; a host renders it from [`text`],
/// [`frame`] and [`is_selected`]. The preferred extent is the length the
/// title asks for along the strip's slide axis.
///
/// [`text`]: LabelView::text
/// [`frame`]: TitleItemView::frame
/// [`is_selected`]: LabelView::is_selected
#[derive(Debug, Clone, PartialEq)]
pub struct LabelView {
    text: String,
    extent: f32,
    frame: Rect,
    selected: bool,
}

impl LabelView {
    /// Create a label with the given text and preferred extent.
    pub fn new(text: impl Into<String>, extent: f32) -> Self {
        Self {
            text: text.into(),
            extent: extent.max(0.0),
            frame: Rect::ZERO,
            selected: false,
        }
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Preferred extent along the slide axis.
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Whether the label is drawn in its selected state.
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

impl TitleItemView for LabelView {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    // Square hint; the strip reads only the component along its axis.
    fn size_hint(&self) -> Size {
        Size::new(self.extent, self.extent)
    }
}
