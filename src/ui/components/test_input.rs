//! Headless input helpers for component tests.

use eframe::egui;

pub const SCREEN: egui::Rect = egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(800.0, 600.0));

pub fn input(events: Vec<egui::Event>) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(SCREEN),
        events,
        ..Default::default()
    }
}

pub fn key_press(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    }
}

/// Runs `add_contents` in a central panel.
pub fn in_panel<R>(ctx: &egui::Context, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::CentralPanel::default().show(ctx, add_contents).inner
}

/// Lays out one frame, presses the primary button at `pos` on the next and
/// releases it on the one after. Returns the last `Some` that `frame`
/// produced in any of the three frames.
///
/// Reusing `ctx` across calls is fine; it only keeps the font atlas warm.
pub fn click_at<R>(
    ctx: &egui::Context,
    pos: egui::Pos2,
    mut frame: impl FnMut(&egui::Context) -> Option<R>,
) -> Option<R> {
    let button = |pressed: bool| egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    };

    let mut result = None;
    for events in [
        vec![],
        vec![egui::Event::PointerMoved(pos), button(true)],
        vec![button(false)],
    ] {
        let _ = ctx.run(input(events), |ctx| {
            if let Some(value) = frame(ctx) {
                result = Some(value);
            }
        });
    }
    result
}

/// Points of `rect` spaced `step` apart, row by row.
pub fn grid(rect: egui::Rect, step: f32) -> impl Iterator<Item = egui::Pos2> {
    let rows = (rect.height() / step) as usize + 1;
    let cols = (rect.width() / step) as usize + 1;
    (0..rows).flat_map(move |row| {
        (0..cols).map(move |col| {
            egui::pos2(rect.min.x + col as f32 * step, rect.min.y + row as f32 * step)
        })
    })
}

/// Points down the vertical line at `x`, from `y_min` to `y_max`.
pub fn column(x: f32, y_min: f32, y_max: f32, step: f32) -> impl Iterator<Item = egui::Pos2> {
    grid(egui::Rect::from_min_max(egui::pos2(x, y_min), egui::pos2(x, y_max)), step)
}
