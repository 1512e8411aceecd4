use crate::ui::styles::PANEL_PADDING;
use eframe::egui;

/// Draws its contents only while `index` is the active tab.
///
/// Nothing is torn down when hidden: the components a panel shows keep
/// their state in their owner, so hiding a panel only skips drawing it.
pub struct TabPanel;

impl TabPanel {
    pub fn show<R>(
        ui: &mut egui::Ui,
        index: usize,
        value: usize,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> Option<R> {
        if index != value {
            return None;
        }

        let inner = egui::Frame::none()
            .inner_margin(PANEL_PADDING)
            .show(ui, |ui| {
                ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
                    add_contents(ui)
                })
                .inner
            })
            .inner;

        Some(inner)
    }
}
