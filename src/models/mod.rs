mod fields;
mod filter;
mod pagination;
mod row;
mod state;
mod tab;

pub use fields::{camel_to_title, detail_pairs, CustomerField, CUSTOMER_FIELDS};
pub use filter::{filter_rows, TableFilter};
pub use pagination::GridPagination;
pub use row::{project_rows, CustomerRow};
pub use state::{LoginForm, ModalState};
pub use tab::{HOME_TAB, LOGIN_TAB, TAB_LABELS};
