use super::row::CustomerRow;
use crate::data::LocationNode;

/// Restricts the grid to rows whose `category` field equals `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFilter {
    pub category: String,
    pub value: String,
}

impl TableFilter {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
        }
    }

    /// Exact, case-sensitive match. A category that names no row field
    /// matches nothing.
    pub fn matches(&self, row: &CustomerRow) -> bool {
        row.field_value(&self.category)
            .is_some_and(|field| field == self.value.as_str())
    }
}

impl From<&LocationNode> for TableFilter {
    fn from(node: &LocationNode) -> Self {
        Self::new(node.category.as_str(), node.value.as_str())
    }
}

/// Rows passing `filter`, in their original order. `None` keeps every row.
pub fn filter_rows(rows: Vec<CustomerRow>, filter: Option<&TableFilter>) -> Vec<CustomerRow> {
    match filter {
        Some(filter) => rows.into_iter().filter(|row| filter.matches(row)).collect(),
        None => rows,
    }
}
