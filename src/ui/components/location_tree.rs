use crate::data::LocationNode;
use eframe::egui;
use std::collections::HashSet;

#[derive(Debug, PartialEq, Eq)]
pub enum LocationTreeEvent {
    NodeClicked(String),
}

/// Country → state → city tree. Expansion is handled here; clicks are
/// reported to the owner, which decides what becomes selected.
///
/// Clicking a node's label both reports it and toggles its children. The
/// arrow only toggles.
pub struct LocationTree {
    expanded: HashSet<String>,
    selected: Option<String>,
}

impl LocationTree {
    pub fn new() -> Self {
        Self {
            expanded: HashSet::new(),
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, nodes: &[LocationNode]) -> Option<LocationTreeEvent> {
        let mut event = None;
        let mut toggled = None;

        egui::ScrollArea::vertical()
            .id_source("location_tree")
            .auto_shrink([true, false])
            .show(ui, |ui| {
                if nodes.is_empty() {
                    ui.label(egui::RichText::new("No locations").color(egui::Color32::GRAY));
                }
                self.show_nodes(ui, nodes, &mut event, &mut toggled);
            });

        if let Some(id) = toggled {
            self.toggle(&id);
        }

        event
    }

    fn show_nodes(
        &self,
        ui: &mut egui::Ui,
        nodes: &[LocationNode],
        event: &mut Option<LocationTreeEvent>,
        toggled: &mut Option<String>,
    ) {
        for node in nodes {
            let is_expanded = self.is_expanded(&node.id);
            let is_selected = self.selected.as_deref() == Some(node.id.as_str());

            ui.horizontal(|ui| {
                if node.is_leaf() {
                    // keeps leaves aligned with their expandable siblings
                    ui.add_space(ui.spacing().icon_width + ui.spacing().button_padding.x * 2.0);
                } else {
                    let arrow = if is_expanded { "▼" } else { "▶" };
                    if ui.small_button(arrow).clicked() {
                        *toggled = Some(node.id.clone());
                    }
                }

                if ui.selectable_label(is_selected, node.value.as_str()).clicked() {
                    *event = Some(LocationTreeEvent::NodeClicked(node.id.clone()));
                    if !node.is_leaf() {
                        *toggled = Some(node.id.clone());
                    }
                }
            });

            if is_expanded && !node.is_leaf() {
                ui.indent(&node.id, |ui| {
                    self.show_nodes(ui, &node.children, event, toggled);
                });
            }
        }
    }
}
