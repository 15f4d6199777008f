//! Integration tests for title strips driven through the public API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use slide_lattice::animation::Easing;
use slide_lattice::prelude::*;

const PAGE: f32 = 320.0;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("slide_lattice=trace")
        .with_test_writer()
        .try_init();
}

fn strip(count: usize, direction: SlideDirection) -> TitleSlidableController<TitleStrip> {
    let visible = match direction {
        SlideDirection::Horizontal => Size::new(300.0, 44.0),
        SlideDirection::Vertical => Size::new(120.0, 300.0),
    };
    let surface = TitleStrip::new(direction, visible)
        .with_scroll_animation(Duration::from_millis(200), Easing::Linear);
    TitleSlidableController::new(count, direction, surface, |index| {
        LabelView::new(format!("Page {index}"), 100.0)
    })
}

fn assert_single_selection(titles: &TitleSlidableController<TitleStrip>, expected: usize) {
    assert_eq!(titles.selected_index(), Some(expected));
    let selected: Vec<usize> = titles
        .items()
        .iter()
        .filter(|item| item.is_selected())
        .map(|item| item.index())
        .collect();
    assert_eq!(selected, vec![expected]);
    assert!(titles.items()[expected].view().is_selected());
}

fn assert_contiguous(titles: &TitleSlidableController<TitleStrip>) {
    for (position, item) in titles.items().iter().enumerate() {
        assert_eq!(item.index(), position);
    }
    let mut previous_end = f32::NEG_INFINITY;
    for item in titles.items() {
        let frame = item.view().frame();
        assert!(frame.left() >= previous_end);
        previous_end = frame.right();
    }
}

#[test]
fn test_jump_selects_exactly_one() {
    setup();
    let mut titles = strip(6, SlideDirection::Horizontal);
    for index in [3, 0, 5, 5, 2] {
        titles.jump(index, false);
        assert_single_selection(&titles, index);
    }
}

#[test]
fn test_select_is_idempotent() {
    setup();
    let mut once = strip(4, SlideDirection::Horizontal);
    let mut twice = strip(4, SlideDirection::Horizontal);
    once.select(2);
    twice.select(2);
    twice.select(2);

    let flags = |titles: &TitleSlidableController<TitleStrip>| -> Vec<bool> {
        titles.items().iter().map(|item| item.is_selected()).collect()
    };
    assert_eq!(once.selected_index(), twice.selected_index());
    assert_eq!(flags(&once), flags(&twice));
}

#[test]
fn test_indices_stay_contiguous_across_mutations() {
    setup();
    let mut titles = strip(3, SlideDirection::Horizontal);
    titles.append(2);
    assert_contiguous(&titles);
    titles.insert(0);
    assert_contiguous(&titles);
    titles.insert(3);
    assert_contiguous(&titles);
    titles.remove_at(6);
    titles.remove_at(1);
    assert_contiguous(&titles);
    titles.insert(99);
    assert_contiguous(&titles);
    assert_eq!(titles.count(), 6);
    assert_eq!(titles.surface().view_count(), 6);
}

#[test]
fn test_remove_moves_following_view_up() {
    setup();
    let mut titles = strip(3, SlideDirection::Horizontal);
    titles.remove_at(1);

    let indices: Vec<usize> = titles.items().iter().map(|item| item.index()).collect();
    assert_eq!(indices, vec![0, 1]);
    assert_eq!(titles.items()[1].view().text(), "Page 2");
    assert_eq!(titles.items()[1].view().frame().left(), 100.0);
}

#[test]
fn test_jump_to_trailing_titles_in_paged_mode() {
    setup();
    let mut titles = strip(5, SlideDirection::Horizontal);
    titles.jump(3, false);
    assert_eq!(titles.surface().content_offset(), Point::new(200.0, 0.0));
    assert_eq!(titles.surface().indicator().position, 300.0);
    assert_eq!(titles.surface().indicator().size, 100.0);
}

#[test]
fn test_animated_jump_settles_on_target() {
    setup();
    let mut titles = strip(5, SlideDirection::Horizontal);
    titles.jump(4, true);
    assert!(titles.surface().is_scrolling());
    assert!(titles.surface().indicator().animated);

    while titles.surface_mut().advance(Duration::from_millis(16)) {}
    assert_eq!(titles.surface().content_offset(), Point::new(200.0, 0.0));
}

#[test]
fn test_vertical_jump_offsets_along_y() {
    setup();
    let mut titles = strip(5, SlideDirection::Vertical);
    titles.jump(4, false);
    assert_eq!(titles.surface().content_offset(), Point::new(0.0, 200.0));
}

#[test]
fn test_controller_follows_strip_axis() {
    setup();
    let surface = TitleStrip::new(SlideDirection::Vertical, Size::new(120.0, 300.0));
    let mut titles = TitleSlidableController::new(10, SlideDirection::Horizontal, surface, |i| {
        LabelView::new(format!("Page {i}"), 100.0)
    });
    assert_eq!(titles.items()[9].view().frame().top(), 900.0);

    titles.jump(9, false);
    assert_eq!(titles.surface().content_offset(), Point::new(0.0, 700.0));
    assert_eq!(titles.surface().indicator().position, 900.0);
    assert_eq!(titles.surface().indicator().size, 100.0);
}

#[test]
fn test_removing_selected_title_collapses_indicator() {
    setup();
    let mut titles = strip(4, SlideDirection::Horizontal);
    titles.jump(2, false);
    assert_eq!(titles.surface().indicator().position, 200.0);

    titles.remove_at(2);
    assert_eq!(titles.selected_index(), None);
    assert_eq!(
        titles.surface().indicator(),
        IndicatorState { position: 0.0, size: 0.0, animated: false }
    );
}

#[test]
fn test_centered_mode_jump() {
    setup();
    let surface = TitleStrip::new(SlideDirection::Horizontal, Size::new(300.0, 44.0))
        .with_shift_mode(ShiftMode::Centered);
    let mut titles = TitleSlidableController::new(10, SlideDirection::Horizontal, surface, |i| {
        LabelView::new(format!("Page {i}"), 100.0)
    });
    titles.jump(4, false);
    assert_eq!(titles.surface().content_offset().x, 300.0);
    titles.jump(9, false);
    assert_eq!(titles.surface().content_offset().x, 700.0);
}

#[test]
fn test_shift_dropped_while_gate_closed() {
    setup();
    let mut titles = strip(10, SlideDirection::Horizontal);
    let pending: Arc<Mutex<Vec<SelectionCompletion>>> = Arc::new(Mutex::new(Vec::new()));
    let pending_clone = pending.clone();
    titles.item_selected.connect(move |(_, completion)| {
        pending_clone.lock().push(completion.clone());
    });

    titles.jump(5, false);
    let before = titles.surface().content_offset();
    titles.tap_item(1);
    assert!(!titles.is_offset_change_allowed());

    for (ratio, start, destination) in [(0.5, 5, 6), (-0.3, 6, 5), (1.0, 0, 9)] {
        titles.shift(ratio, start, destination);
        assert_eq!(titles.surface().content_offset(), before);
    }

    for completion in pending.lock().drain(..) {
        completion.complete();
    }
    titles.shift(0.5, 5, 6);
    assert_ne!(titles.surface().content_offset(), before);
}

#[test]
fn test_shift_ignores_out_of_range_indices() {
    setup();
    let mut titles = strip(4, SlideDirection::Horizontal);
    titles.surface_mut().set_content_offset(Point::new(37.0, 0.0), false);
    titles.shift(0.5, 0, 4);
    titles.shift(0.5, 4, 0);
    assert_eq!(titles.surface().content_offset(), Point::new(37.0, 0.0));
}

#[test]
fn test_indicator_slide_boundaries() {
    setup();
    let extents = [70.0, 130.0, 90.0];
    let surface = TitleStrip::new(SlideDirection::Horizontal, Size::new(300.0, 44.0));
    let mut titles = TitleSlidableController::new(3, SlideDirection::Horizontal, surface, move |i| {
        LabelView::new(format!("Page {i}"), extents[i])
    });

    for (start, destination) in [(0, 1), (1, 2), (2, 0)] {
        let start_frame = titles.items()[start].view().frame();
        let destination_frame = titles.items()[destination].view().frame();

        titles.indicator_slide(0.0, PAGE, start, destination);
        let indicator = titles.surface().indicator();
        assert_eq!(indicator.position, start_frame.left());
        assert_eq!(indicator.size, start_frame.width());

        titles.indicator_slide(PAGE, PAGE, start, destination);
        let indicator = titles.surface().indicator();
        assert_eq!(indicator.size, destination_frame.width());
        assert_eq!(
            indicator.position,
            start_frame.left() + (destination_frame.left() - start_frame.left()).abs()
        );
        assert!(!indicator.animated);
    }
}

#[test]
fn test_tap_ignored_when_selection_disallowed() {
    setup();
    let mut titles = strip(3, SlideDirection::Horizontal);
    titles.set_selection_allowed(false);
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_clone = fired.clone();
    titles.item_selected.connect(move |_| {
        fired_clone.fetch_add(1, Ordering::SeqCst);
    });
    let indicator = titles.surface().indicator();

    titles.tap_item(2);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert_eq!(titles.selected_index(), Some(0));
    assert_eq!(titles.surface().indicator(), indicator);

    // Programmatic navigation still works.
    titles.jump(2, false);
    assert_single_selection(&titles, 2);
}

#[test]
fn test_tap_then_settle_flow() {
    setup();
    let mut titles = strip(5, SlideDirection::Horizontal);
    let pending: Arc<Mutex<Option<(usize, SelectionCompletion)>>> = Arc::new(Mutex::new(None));
    let pending_clone = pending.clone();
    titles.item_selected.connect(move |(index, completion)| {
        *pending_clone.lock() = Some((*index, completion.clone()));
    });

    titles.tap_item(4);
    assert_eq!(titles.surface().indicator().position, 400.0);

    // The host pager finishes its transition, settles the strip and
    // releases the gate.
    let (index, completion) = pending.lock().take().expect("tap was reported");
    titles.jump(index, true);
    completion.complete();

    assert_single_selection(&titles, 4);
    assert!(titles.is_offset_change_allowed());
    assert_eq!(titles.surface().scroll_target(), Point::new(200.0, 0.0));
}

#[test]
fn test_drag_tracking_matches_manual_feed() {
    setup();
    let mut tracked = strip(10, SlideDirection::Horizontal);
    let mut manual = strip(10, SlideDirection::Horizontal);

    for content_offset in [3.0 * PAGE + 40.0, 3.0 * PAGE + 200.0, 3.0 * PAGE - 120.0] {
        let progress = PageProgress::resolve(content_offset, PAGE, 3, 10).expect("drag in range");
        tracked.track(&progress);
        manual.shift(progress.ratio, progress.start_index, progress.destination_index);
        manual.indicator_slide(
            progress.offset,
            progress.page_size,
            progress.start_index,
            progress.destination_index,
        );
        assert_eq!(tracked.surface().content_offset(), manual.surface().content_offset());
        assert_eq!(tracked.surface().indicator(), manual.surface().indicator());
    }
}

#[test]
fn test_empty_strip_ignores_everything() {
    setup();
    let mut titles = strip(0, SlideDirection::Horizontal);
    titles.jump(0, true);
    titles.select(0);
    titles.shift(0.5, 0, 1);
    titles.indicator_slide(10.0, PAGE, 0, 1);
    titles.tap_item(0);
    titles.remove_at(0);

    assert!(titles.is_empty());
    assert_eq!(titles.selected_index(), None);
    assert_eq!(titles.surface().content_offset(), Point::ZERO);
    assert_eq!(titles.surface().content_size(), Size::ZERO);
}

#[test]
fn test_strip_from_config() {
    setup();
    let config = TitleStripConfig::from_toml_str(
        r#"
        item_spacing = 20.0
        animate_indicator = false
        "#,
    )
    .unwrap();
    let surface = TitleStrip::from_config(&config, Size::new(300.0, 44.0));
    let mut titles = TitleSlidableController::new(3, config.slide_direction, surface, |i| {
        LabelView::new(format!("Page {i}"), 100.0)
    });

    assert_eq!(titles.items()[2].view().frame().left(), 240.0);
    assert_eq!(titles.surface().content_size().width, 340.0);
    titles.jump(2, true);
    assert!(!titles.surface().indicator().animated);
}
