use crate::ui::styles::{MODAL_MAX_HEIGHT, MODAL_WIDTH};
use eframe::egui;

#[derive(Debug, PartialEq, Eq)]
pub enum DetailsModalEvent {
    Close,
}

/// Centered window listing bold labels with their values underneath.
pub struct DetailsModal;

impl DetailsModal {
    pub fn show<'a>(
        ctx: &egui::Context,
        id: egui::Id,
        title: &str,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Option<DetailsModalEvent> {
        let mut is_open = true;

        egui::Window::new(title)
            .id(id)
            .open(&mut is_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(MODAL_WIDTH)
            .max_width(MODAL_WIDTH)
            .max_height(MODAL_MAX_HEIGHT)
            .vscroll(true)
            .show(ctx, |ui| {
                ui.separator();

                for (label, value) in pairs {
                    ui.add_space(8.0);
                    ui.add(egui::Label::new(egui::RichText::new(label).strong()).wrap(true));
                    ui.add(egui::Label::new(value).wrap(true));
                }
            });

        let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if !is_open || escape {
            return Some(DetailsModalEvent::Close);
        }

        None
    }
}
