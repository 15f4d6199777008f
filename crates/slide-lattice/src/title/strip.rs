//! A headless title strip surface.
//!
//! [`TitleStrip`] implements [`SlidableSurface`] without any drawing: it lays
//! titles out back to back along the slide axis, keeps the scroll offset
//! (animating settles with an [`OffsetAnimation`]) and records where the
//! indicator should be. A host renders from its state each frame and calls
//! [`TitleStrip::advance`] with the frame delta.

use std::marker::PhantomData;
use std::time::Duration;

use slide_lattice_core::logging::targets;
use slide_lattice_core::{Point, Size, SlideDirection};

use super::label::LabelView;
use super::surface::{ShiftMode, SlidableSurface, TitleItemView};
use crate::animation::{Easing, OffsetAnimation};
use crate::config::TitleStripConfig;

/// Where the selection indicator sits, measured along the slide axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorState {
    /// Leading edge of the indicator.
    pub position: f32,
    /// Length of the indicator.
    pub size: f32,
    /// Whether the last move asked for an animation.
    pub animated: bool,
}

/// A linear, scrollable strip of titles.
pub struct TitleStrip<V = LabelView> {
    slide_direction: SlideDirection,
    visible_size: Size,
    content_size: Size,
    content_offset: Point,
    scroll_animation: Option<OffsetAnimation>,
    scroll_duration: Duration,
    scroll_easing: Easing,
    item_spacing: f32,
    shift_mode: ShiftMode,
    animate_indicator: bool,
    indicator: IndicatorState,
    view_count: usize,
    _view: PhantomData<fn() -> V>,
}

impl<V: TitleItemView> TitleStrip<V> {
    /// Create an empty strip with the given viewport.
    pub fn new(slide_direction: SlideDirection, visible_size: Size) -> Self {
        Self {
            slide_direction,
            visible_size,
            content_size: Size::ZERO,
            content_offset: Point::ZERO,
            scroll_animation: None,
            scroll_duration: Duration::from_millis(250),
            scroll_easing: Easing::EaseInOut,
            item_spacing: 0.0,
            shift_mode: ShiftMode::Paged,
            animate_indicator: true,
            indicator: IndicatorState::default(),
            view_count: 0,
            _view: PhantomData,
        }
    }

    /// Create a strip from a validated configuration.
    pub fn from_config(config: &TitleStripConfig, visible_size: Size) -> Self {
        Self::new(config.slide_direction, visible_size)
            .with_shift_mode(config.shift_mode)
            .with_item_spacing(config.item_spacing)
            .with_indicator_animation(config.animate_indicator)
            .with_scroll_animation(
                config.scroll_animation.duration(),
                config.scroll_animation.easing,
            )
    }

    /// Set the shift mode using builder pattern.
    pub fn with_shift_mode(mut self, mode: ShiftMode) -> Self {
        self.shift_mode = mode;
        self
    }

    /// Set the gap between titles using builder pattern.
    pub fn with_item_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = spacing.max(0.0);
        self
    }

    /// Set whether tap and settle selections animate the indicator.
    pub fn with_indicator_animation(mut self, animate: bool) -> Self {
        self.animate_indicator = animate;
        self
    }

    /// Set the duration and easing of animated scrolls.
    pub fn with_scroll_animation(mut self, duration: Duration, easing: Easing) -> Self {
        self.scroll_duration = duration;
        self.scroll_easing = easing;
        self
    }

    /// Change the scroll policy.
    pub fn set_shift_mode(&mut self, mode: ShiftMode) {
        self.shift_mode = mode;
    }

    /// Resize the viewport. The owning controller should relayout afterwards.
    pub fn set_visible_size(&mut self, size: Size) {
        self.visible_size = size;
    }

    /// Gap between adjacent titles.
    pub fn item_spacing(&self) -> f32 {
        self.item_spacing
    }

    /// Where the indicator currently is.
    pub fn indicator(&self) -> IndicatorState {
        self.indicator
    }

    /// Number of title views the strip holds.
    pub fn view_count(&self) -> usize {
        self.view_count
    }

    /// Whether an animated scroll is still running.
    pub fn is_scrolling(&self) -> bool {
        self.scroll_animation.is_some()
    }

    /// Offset an animated scroll is heading to, or the current offset.
    pub fn scroll_target(&self) -> Point {
        self.scroll_animation
            .as_ref()
            .map_or(self.content_offset, OffsetAnimation::target)
    }

    /// Advance a running scroll animation by one frame.
    ///
    /// Returns `true` while the animation is still running.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let Some(animation) = self.scroll_animation.as_mut() else {
            return false;
        };
        self.content_offset = animation.advance(delta);
        if animation.is_finished() {
            tracing::trace!(target: targets::STRIP, offset = ?self.content_offset, "scroll finished");
            self.scroll_animation = None;
            return false;
        }
        true
    }
}

impl<V: TitleItemView> SlidableSurface for TitleStrip<V> {
    type View = V;

    fn slide_direction(&self) -> SlideDirection {
        self.slide_direction
    }

    fn content_offset(&self) -> Point {
        self.content_offset
    }

    fn set_content_offset(&mut self, offset: Point, animated: bool) {
        if animated && !self.scroll_duration.is_zero() && offset != self.content_offset {
            self.scroll_animation = Some(OffsetAnimation::new(
                self.content_offset,
                offset,
                self.scroll_duration,
                self.scroll_easing,
            ));
        } else {
            self.scroll_animation = None;
            self.content_offset = offset;
        }
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn visible_size(&self) -> Size {
        self.visible_size
    }

    fn append_views(&mut self, count: usize) {
        self.view_count += count;
    }

    fn insert_view(&mut self, index: usize) {
        tracing::trace!(target: targets::STRIP, index, "view inserted");
        self.view_count += 1;
    }

    fn remove_view(&mut self, index: usize) {
        tracing::trace!(target: targets::STRIP, index, "view removed");
        self.view_count = self.view_count.saturating_sub(1);
    }

    fn layout_views(&mut self, views: &mut [&mut V]) {
        let axis = self.slide_direction;
        let cross = axis.cross_length(self.visible_size);
        let mut position = 0.0;
        for (i, view) in views.iter_mut().enumerate() {
            if i > 0 {
                position += self.item_spacing;
            }
            let extent = axis.length(view.size_hint());
            view.set_frame(axis.rect(position, extent, cross));
            position += extent;
        }
        self.content_size = axis.size(position, cross);
        tracing::trace!(target: targets::STRIP, views = views.len(), length = position, "laid out titles");
    }

    fn set_indicator(&mut self, size: f32, position: f32, animated: bool) {
        self.indicator = IndicatorState {
            position,
            size,
            animated,
        };
    }

    fn shift_mode(&self) -> ShiftMode {
        self.shift_mode
    }

    fn should_animate_indicator_on_selection(&self, _index: usize) -> bool {
        self.animate_indicator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slide_lattice_core::Rect;

    fn labels(extents: &[f32]) -> Vec<LabelView> {
        extents
            .iter()
            .enumerate()
            .map(|(i, &extent)| LabelView::new(format!("Title {i}"), extent))
            .collect()
    }

    #[test]
    fn test_horizontal_layout_with_spacing() {
        let mut strip: TitleStrip =
            TitleStrip::new(SlideDirection::Horizontal, Size::new(300.0, 44.0)).with_item_spacing(10.0);
        let mut views = labels(&[80.0, 120.0, 60.0]);
        let mut refs: Vec<&mut LabelView> = views.iter_mut().collect();
        strip.layout_views(&mut refs);

        assert_eq!(views[0].frame(), Rect::new(0.0, 0.0, 80.0, 44.0));
        assert_eq!(views[1].frame(), Rect::new(90.0, 0.0, 120.0, 44.0));
        assert_eq!(views[2].frame(), Rect::new(220.0, 0.0, 60.0, 44.0));
        assert_eq!(strip.content_size(), Size::new(280.0, 44.0));
    }

    #[test]
    fn test_vertical_layout() {
        let mut strip: TitleStrip = TitleStrip::new(SlideDirection::Vertical, Size::new(120.0, 200.0));
        let mut views = labels(&[40.0, 40.0]);
        let mut refs: Vec<&mut LabelView> = views.iter_mut().collect();
        strip.layout_views(&mut refs);

        assert_eq!(views[1].frame(), Rect::new(0.0, 40.0, 120.0, 40.0));
        assert_eq!(strip.content_size(), Size::new(120.0, 80.0));
    }

    #[test]
    fn test_immediate_offset() {
        let mut strip: TitleStrip = TitleStrip::new(SlideDirection::Horizontal, Size::new(300.0, 44.0));
        strip.set_content_offset(Point::new(120.0, 0.0), false);
        assert_eq!(strip.content_offset(), Point::new(120.0, 0.0));
        assert!(!strip.is_scrolling());
    }

    #[test]
    fn test_animated_offset_converges() {
        let mut strip: TitleStrip = TitleStrip::new(SlideDirection::Horizontal, Size::new(300.0, 44.0))
            .with_scroll_animation(Duration::from_millis(200), Easing::Linear);
        strip.set_content_offset(Point::new(200.0, 0.0), true);
        assert!(strip.is_scrolling());
        assert_eq!(strip.content_offset(), Point::ZERO);
        assert_eq!(strip.scroll_target(), Point::new(200.0, 0.0));

        assert!(strip.advance(Duration::from_millis(100)));
        assert_eq!(strip.content_offset(), Point::new(100.0, 0.0));
        assert!(!strip.advance(Duration::from_millis(100)));
        assert_eq!(strip.content_offset(), Point::new(200.0, 0.0));
        assert!(!strip.advance(Duration::from_millis(16)));
    }

    #[test]
    fn test_last_write_wins() {
        let mut strip: TitleStrip = TitleStrip::new(SlideDirection::Horizontal, Size::new(300.0, 44.0))
            .with_scroll_animation(Duration::from_millis(200), Easing::Linear);
        strip.set_content_offset(Point::new(200.0, 0.0), true);
        strip.advance(Duration::from_millis(100));
        strip.set_content_offset(Point::new(40.0, 0.0), false);
        assert!(!strip.is_scrolling());
        assert_eq!(strip.content_offset(), Point::new(40.0, 0.0));
    }

    #[test]
    fn test_indicator_and_policy() {
        let mut strip: TitleStrip = TitleStrip::new(SlideDirection::Horizontal, Size::new(300.0, 44.0))
            .with_indicator_animation(false)
            .with_shift_mode(ShiftMode::Centered);
        strip.set_indicator(80.0, 120.0, true);
        assert_eq!(
            strip.indicator(),
            IndicatorState {
                position: 120.0,
                size: 80.0,
                animated: true
            }
        );
        assert!(!strip.should_animate_indicator_on_selection(0));
        assert_eq!(strip.shift_mode(), ShiftMode::Centered);
    }
}
