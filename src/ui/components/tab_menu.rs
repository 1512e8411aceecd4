use crate::models::TAB_LABELS;
use crate::ui::styles::TAB_MENU_MIN_WIDTH;
use eframe::egui;

#[derive(Debug, PartialEq, Eq)]
pub enum TabMenuEvent {
    Selected(usize),
}

pub struct TabMenu;

impl TabMenu {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, active_tab: usize) -> Option<TabMenuEvent> {
        let mut event = None;

        ui.vertical(|ui| {
            ui.set_min_width(TAB_MENU_MIN_WIDTH);

            for (i, label) in TAB_LABELS.iter().enumerate() {
                let is_active = i == active_tab;
                let text = egui::RichText::new(label.to_uppercase()).strong();

                if ui.selectable_label(is_active, text).clicked() && !is_active {
                    event = Some(TabMenuEvent::Selected(i));
                }
            }
        });

        event
    }
}
