//! Title strip walkthrough.
//!
//! Builds a strip of eight titles, drags the content pager from page 2
//! towards page 3, taps a title and settles on it, logging each step.
//!
//! Run with: RUST_LOG=slide_lattice=debug cargo run -p slide-lattice --example strip

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use slide_lattice::prelude::*;

const PAGE_WIDTH: f32 = 390.0;
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slide_lattice=debug".into()),
        )
        .init();

    let config = TitleStripConfig::from_toml_str(
        r#"
        shift_mode = "centered"
        item_spacing = 8.0

        [scroll_animation]
        duration_ms = 200
        easing = "ease_out_cubic"
        "#,
    )?;

    let names = ["Home", "Inbox", "Drafts", "Sent", "Archive", "Spam", "Trash", "Settings"];
    let strip = TitleStrip::from_config(&config, Size::new(PAGE_WIDTH, 44.0));
    let mut titles = TitleSlidableController::new(names.len(), config.slide_direction, strip, move |i| {
        let name = names.get(i).copied().unwrap_or("Page");
        LabelView::new(name, 24.0 + 10.0 * name.len() as f32)
    });

    let pending: Arc<Mutex<Option<(usize, SelectionCompletion)>>> = Arc::new(Mutex::new(None));
    let pending_clone = pending.clone();
    titles.item_selected.connect(move |(index, completion)| {
        tracing::info!(index, "title tapped, starting page transition");
        *pending_clone.lock() = Some((*index, completion.clone()));
    });

    titles.jump(2, false);
    report("settled on page 2", &titles);

    // Drag the pager from page 2 towards page 3.
    for step in 1..=4 {
        let content_offset = 2.0 * PAGE_WIDTH + step as f32 * PAGE_WIDTH / 5.0;
        if let Some(progress) = PageProgress::resolve(content_offset, PAGE_WIDTH, 2, titles.count()) {
            titles.track(&progress);
            report(&format!("drag {:.0}%", progress.ratio * 100.0), &titles);
        }
    }
    titles.jump(3, true);
    while titles.surface_mut().advance(FRAME) {}
    report("released on page 3", &titles);

    // Tap a title; the pager transition finishes and completes the selection.
    titles.tap_item(6);
    if let Some((index, completion)) = pending.lock().take() {
        titles.jump(index, true);
        while titles.surface_mut().advance(FRAME) {}
        completion.complete();
    }
    report("tap settled", &titles);

    Ok(())
}

fn report(step: &str, titles: &TitleSlidableController<TitleStrip>) {
    let indicator = titles.surface().indicator();
    tracing::info!(
        step,
        selected = ?titles.selected_index(),
        offset = titles.surface().content_offset().x,
        indicator_position = indicator.position,
        indicator_size = indicator.size,
        "strip state"
    );
}
