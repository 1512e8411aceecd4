use crate::config::PAGE_SIZE_OPTIONS;
use crate::models::GridPagination;
use eframe::egui;

#[derive(Debug, PartialEq, Eq)]
pub enum PaginationEvent {
    PageSizeChanged(usize),
    PageChanged(usize),
}

pub struct PaginationControls;

impl PaginationControls {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        pagination: &GridPagination,
        total_rows: usize,
    ) -> Option<PaginationEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(pagination.has_next(total_rows), egui::Button::new("▶"))
                    .on_hover_text("Next page")
                    .clicked()
                {
                    event = Some(PaginationEvent::PageChanged(pagination.page + 1));
                }

                if ui
                    .add_enabled(pagination.has_previous(), egui::Button::new("◀"))
                    .on_hover_text("Previous page")
                    .clicked()
                {
                    event = Some(PaginationEvent::PageChanged(pagination.page - 1));
                }

                ui.label(pagination.summary(total_rows));

                ui.separator();

                for size in PAGE_SIZE_OPTIONS.into_iter().rev() {
                    let is_selected = pagination.page_size == size;
                    if ui.selectable_label(is_selected, size.to_string()).clicked() && !is_selected {
                        event = Some(PaginationEvent::PageSizeChanged(size));
                    }
                }

                ui.label("Rows per page:");
            });
        });

        event
    }
}
