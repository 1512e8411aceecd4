use std::ops::Range;

/// Page position of the customer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPagination {
    pub page: usize,
    pub page_size: usize,
}

impl GridPagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size).max(1)
    }

    /// Indices of the rows on the current page.
    pub fn range(&self, total_rows: usize) -> Range<usize> {
        let start = (self.page * self.page_size).min(total_rows);
        let end = (start + self.page_size).min(total_rows);
        start..end
    }

    /// `"1–20 of 25"`, or `"0–0 of 0"` for an empty grid.
    pub fn summary(&self, total_rows: usize) -> String {
        let range = self.range(total_rows);
        if range.is_empty() {
            format!("0–0 of {}", total_rows)
        } else {
            format!("{}–{} of {}", range.start + 1, range.end, total_rows)
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total_rows: usize) -> bool {
        self.page + 1 < self.total_pages(total_rows)
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// Pulls the page back inside the data after the row count shrinks.
    pub fn clamp(&mut self, total_rows: usize) {
        let last = self.total_pages(total_rows) - 1;
        if self.page > last {
            self.page = last;
        }
    }
}
