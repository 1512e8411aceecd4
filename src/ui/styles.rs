use eframe::egui;

/// Outer padding around the whole tab set.
pub const APP_PADDING: f32 = 96.0;
pub const TAB_MENU_MIN_WIDTH: f32 = 100.0;
pub const PANEL_PADDING: f32 = 24.0;

pub const TABLE_PANEL_HEIGHT: f32 = 500.0;
pub const ACTIONS_MIN_WIDTH: f32 = 175.0;
pub const TABLE_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(245, 245, 245);

pub const MODAL_WIDTH: f32 = 400.0;
pub const MODAL_MAX_HEIGHT: f32 = 800.0;

/// Setup proportional text sizes for the form and table content
pub fn setup_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(14.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::new(14.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::new(20.0, egui::FontFamily::Proportional)
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::new(11.0, egui::FontFamily::Proportional)
    );
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);

    ctx.set_style(style);
}
