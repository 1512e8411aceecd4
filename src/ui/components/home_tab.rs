use super::customer_table::CustomerDetails;
use super::location_tree::{LocationTree, LocationTreeEvent};
use crate::data::{Fixture, LocationNode};
use crate::models::TableFilter;
use eframe::egui;

#[derive(Debug, PartialEq, Eq)]
pub enum HomeTabEvent {
    /// A tree node with this id was clicked.
    NodeSelected(String),
    ClearFilter,
}

/// Location tree beside the customer grid. Owns the grid filter.
pub struct HomeTab {
    filter: Option<TableFilter>,
    tree: LocationTree,
    customers: CustomerDetails,
}

impl HomeTab {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: None,
            tree: LocationTree::new(),
            customers: CustomerDetails::new(page_size),
        }
    }

    pub fn filter(&self) -> Option<&TableFilter> {
        self.filter.as_ref()
    }

    pub fn customers(&self) -> &CustomerDetails {
        &self.customers
    }

    pub fn customers_mut(&mut self) -> &mut CustomerDetails {
        &mut self.customers
    }

    /// Whether a row's details modal is showing.
    pub fn modal_open(&self) -> bool {
        self.customers.any_details_open()
    }

    pub fn handle(&mut self, event: HomeTabEvent, locations: &[LocationNode]) {
        match event {
            HomeTabEvent::NodeSelected(id) => match LocationNode::find(locations, &id) {
                Some(node) => {
                    let filter = TableFilter::from(node);
                    tracing::debug!(category = %filter.category, value = %filter.value, "Table filter set");
                    self.tree.select(&id);
                    self.set_filter(Some(filter));
                }
                None => tracing::warn!(%id, "Clicked location node is not in the tree"),
            },
            HomeTabEvent::ClearFilter => {
                tracing::debug!("Table filter cleared");
                self.tree.clear_selection();
                self.set_filter(None);
            }
        }
    }

    fn set_filter(&mut self, filter: Option<TableFilter>) {
        if self.filter != filter {
            self.customers.reset_page();
        }
        self.filter = filter;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, fixture: &Fixture) {
        let mut event = None;

        ui.vertical(|ui| {
            ui.set_max_width(220.0);

            if ui
                .add_enabled(self.filter.is_some(), egui::Button::new("Show all"))
                .on_hover_text("Clear the location filter")
                .clicked()
            {
                event = Some(HomeTabEvent::ClearFilter);
            }
            ui.separator();

            if let Some(LocationTreeEvent::NodeClicked(id)) = self.tree.show(ui, &fixture.locations) {
                event = Some(HomeTabEvent::NodeSelected(id));
            }
        });

        self.customers.show(ui, &fixture.customers, self.filter.as_ref());

        if let Some(event) = event {
            self.handle(event, &fixture.locations);
        }
    }
}
