use super::details_modal::{DetailsModal, DetailsModalEvent};
use crate::models::{detail_pairs, CustomerRow, ModalState};
use eframe::egui;

#[derive(Debug, PartialEq, Eq)]
pub enum ActionRowEvent {
    View,
    Edit,
    Delete,
    CloseDetails,
}

/// View / edit / delete controls of one grid row, plus that row's
/// details modal.
pub struct ActionRow {
    row_id: u32,
    modal: ModalState,
}

impl ActionRow {
    pub fn new(row_id: u32) -> Self {
        Self {
            row_id,
            modal: ModalState::Closed,
        }
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn handle(&mut self, event: ActionRowEvent) {
        match event {
            ActionRowEvent::View => {
                tracing::debug!(row = self.row_id, "Opening customer details");
                self.modal = ModalState::Open;
            }
            ActionRowEvent::CloseDetails => {
                tracing::debug!(row = self.row_id, "Closing customer details");
                self.modal = ModalState::Closed;
            }
            // Edit and delete are placeholders with no behavior.
            ActionRowEvent::Edit | ActionRowEvent::Delete => {
                tracing::trace!(row = self.row_id, ?event, "Row action has no handler");
            }
        }
    }

    /// Draws the buttons into the actions cell.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<ActionRowEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            if ui.button("👁").on_hover_text("View").clicked() {
                event = Some(ActionRowEvent::View);
            }
            if ui.button("✏").on_hover_text("Edit").clicked() {
                event = Some(ActionRowEvent::Edit);
            }
            if ui.button("🗑").on_hover_text("Delete").clicked() {
                event = Some(ActionRowEvent::Delete);
            }
        });

        event
    }

    /// Draws the details modal when open. Must run outside the table so
    /// the window is not clipped to the cell.
    pub fn show_details(&mut self, ctx: &egui::Context, row: &CustomerRow) {
        if !self.modal.is_open() {
            return;
        }

        let pairs = detail_pairs(row);
        let id = egui::Id::new(("customer_details", self.row_id));
        let event = DetailsModal::show(
            ctx,
            id,
            "Details",
            pairs.iter().map(|(label, value)| (label.as_str(), value.as_str())),
        );

        if let Some(DetailsModalEvent::Close) = event {
            self.handle(ActionRowEvent::CloseDetails);
        }
    }
}
