use super::action_row::{ActionRow, ActionRowEvent};
use super::pagination::{PaginationControls, PaginationEvent};
use crate::data::Customer;
use crate::models::{filter_rows, project_rows, CustomerRow, GridPagination, TableFilter, CUSTOMER_FIELDS};
use crate::ui::styles::{ACTIONS_MIN_WIDTH, PANEL_PADDING, TABLE_BACKGROUND, TABLE_PANEL_HEIGHT};
use eframe::egui;
use std::collections::BTreeMap;

const HEADER_HEIGHT: f32 = 28.0;
const ROW_HEIGHT: f32 = 32.0;

/// Paginated customer grid. Rows are derived from the fixture and the
/// owner's filter on every frame.
pub struct CustomerDetails {
    pagination: GridPagination,
    controls: PaginationControls,
    action_rows: BTreeMap<u32, ActionRow>,
}

impl CustomerDetails {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: GridPagination::new(page_size),
            controls: PaginationControls::new(),
            action_rows: BTreeMap::new(),
        }
    }

    pub fn pagination(&self) -> &GridPagination {
        &self.pagination
    }

    /// Back to the first page, used when the row set changes.
    pub fn reset_page(&mut self) {
        self.pagination.page = 0;
    }

    pub fn handle_pagination(&mut self, event: PaginationEvent) {
        match event {
            PaginationEvent::PageChanged(page) => self.pagination.page = page,
            PaginationEvent::PageSizeChanged(size) => self.pagination.set_page_size(size),
        }
        tracing::debug!(page = self.pagination.page, page_size = self.pagination.page_size, "Grid page changed");
    }

    pub fn handle_action(&mut self, row_id: u32, event: ActionRowEvent) {
        self.action_rows
            .entry(row_id)
            .or_insert_with(|| ActionRow::new(row_id))
            .handle(event);
    }

    pub fn action_row(&self, row_id: u32) -> Option<&ActionRow> {
        self.action_rows.get(&row_id)
    }

    pub fn any_details_open(&self) -> bool {
        self.action_rows.values().any(|row| row.modal().is_open())
    }

    /// All rows passing `filter`.
    pub fn filtered_rows(customers: &[Customer], filter: Option<&TableFilter>) -> Vec<CustomerRow> {
        filter_rows(project_rows(customers), filter)
    }

    /// Rows on the current page, after clamping the page to the data.
    /// Action rows for rows that are no longer on the page are dropped.
    pub fn page_rows(&mut self, customers: &[Customer], filter: Option<&TableFilter>) -> (Vec<CustomerRow>, usize) {
        let mut rows = Self::filtered_rows(customers, filter);
        let total = rows.len();

        self.pagination.clamp(total);
        let range = self.pagination.range(total);
        rows.truncate(range.end);
        let page: Vec<CustomerRow> = rows.drain(range.start..).collect();

        self.action_rows
            .retain(|id, _| page.iter().any(|row| row.id == *id));

        (page, total)
    }

    pub fn show(&mut self, ui: &mut egui::Ui, customers: &[Customer], filter: Option<&TableFilter>) {
        let (rows, total) = self.page_rows(customers, filter);
        let mut actions: Vec<(u32, ActionRowEvent)> = Vec::new();
        let mut pagination_event = None;

        egui::Frame::none()
            .fill(TABLE_BACKGROUND)
            .inner_margin(PANEL_PADDING)
            .show(ui, |ui| {
                egui::Frame::group(ui.style())
                    .fill(ui.visuals().panel_fill)
                    .inner_margin(PANEL_PADDING)
                    .show(ui, |ui| ui.vertical(|ui| {
                        ui.set_height(TABLE_PANEL_HEIGHT);
                        ui.heading("Customer Details");
                        ui.add_space(4.0);

                        let table_height = TABLE_PANEL_HEIGHT - 2.0 * HEADER_HEIGHT - 40.0;
                        self.show_table(ui, &rows, table_height, &mut actions);

                        if rows.is_empty() {
                            ui.vertical_centered(|ui| {
                                ui.add_space(HEADER_HEIGHT);
                                ui.label(egui::RichText::new("No rows").color(egui::Color32::GRAY));
                            });
                        }

                        ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
                            pagination_event = self.controls.show(ui, &self.pagination, total);
                        });
                    }));
            });

        for (row_id, event) in actions {
            self.handle_action(row_id, event);
        }
        if let Some(event) = pagination_event {
            self.handle_pagination(event);
        }

        let ctx = ui.ctx().clone();
        for row in &rows {
            if let Some(action_row) = self.action_rows.get_mut(&row.id) {
                action_row.show_details(&ctx, row);
            }
        }
    }

    fn show_table(
        &mut self,
        ui: &mut egui::Ui,
        rows: &[CustomerRow],
        max_height: f32,
        actions: &mut Vec<(u32, ActionRowEvent)>,
    ) {
        use egui_extras::{Column, TableBuilder};

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .vscroll(true)
            .max_scroll_height(max_height)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(40.0).at_least(30.0))
            .columns(Column::auto().at_least(80.0).clip(true), CUSTOMER_FIELDS.len() - 1)
            .column(Column::remainder().at_least(ACTIONS_MIN_WIDTH))
            .header(HEADER_HEIGHT, |mut header| {
                for field in CUSTOMER_FIELDS {
                    header.col(|ui| {
                        ui.strong(field.header);
                    });
                }
                header.col(|ui| {
                    ui.strong("Actions");
                });
            })
            .body(|mut body| {
                for row in rows {
                    body.row(ROW_HEIGHT, |mut row_ui| {
                        for field in CUSTOMER_FIELDS {
                            row_ui.col(|ui| {
                                ui.add(egui::Label::new((field.value)(row).into_owned()).truncate(true));
                            });
                        }
                        row_ui.col(|ui| {
                            let action_row = self
                                .action_rows
                                .entry(row.id)
                                .or_insert_with(|| ActionRow::new(row.id));
                            if let Some(event) = action_row.show(ui) {
                                actions.push((row.id, event));
                            }
                        });
                    });
                }
            });
    }
}
