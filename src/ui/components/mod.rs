mod action_row;
mod customer_table;
mod details_modal;
mod home_tab;
mod location_tree;
mod login_tab;
mod pagination;
mod tab_menu;
mod tab_panel;
mod tabset;
#[cfg(test)]
mod test_input;

pub use action_row::{ActionRow, ActionRowEvent};
pub use customer_table::CustomerDetails;
pub use details_modal::{DetailsModal, DetailsModalEvent};
pub use home_tab::{HomeTab, HomeTabEvent};
pub use location_tree::{LocationTree, LocationTreeEvent};
pub use login_tab::{LoginTab, LoginTabEvent};
pub use pagination::{PaginationControls, PaginationEvent};
pub use tab_menu::{TabMenu, TabMenuEvent};
pub use tab_panel::TabPanel;
pub use tabset::Tabset;
