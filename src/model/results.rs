//! Result view state
//!
//! One search session: the full result set plus sort and page state.
//! Sorting mutates the set in place; pagination is computed over it.
//! The exporters read `all_results` directly so they always see every
//! record in the current order, not the visible page.

use crate::api::ResultRecord;
use crate::logic::columns::Column;
use crate::logic::{pagination, sorting};

pub const PAGE_SIZE: usize = 20;

/// Loading state of the view. The view opens before the search response
/// arrives; a failed search shows its message inside the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsLoad {
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug)]
pub struct ResultsView {
    pub all_results: Vec<ResultRecord>,
    pub sort_column: Option<Column>,
    pub sort_ascending: bool,
    /// 1-based.
    pub current_page: usize,
    pub load: ResultsLoad,
    /// While an exporter runs, the on-screen table shows the full set;
    /// the exporter restores this on success and failure alike.
    pub show_all_rows: bool,
}

impl ResultsView {
    /// A freshly opened view waiting for its search response.
    pub fn loading() -> Self {
        Self {
            all_results: Vec::new(),
            sort_column: None,
            sort_ascending: true,
            current_page: 1,
            load: ResultsLoad::Loading,
            show_all_rows: false,
        }
    }

    pub fn set_results(&mut self, results: Vec<ResultRecord>) {
        self.all_results = results;
        self.sort_column = None;
        self.sort_ascending = true;
        self.current_page = 1;
        self.load = ResultsLoad::Loaded;
    }

    pub fn set_failed(&mut self, message: String) {
        self.all_results.clear();
        self.current_page = 1;
        self.load = ResultsLoad::Failed(message);
    }

    /// Sort by a column. Repeating the last column flips the direction;
    /// a new column starts ascending. The current page is preserved,
    /// only the order and the header arrow change.
    pub fn sort(&mut self, column: Column) {
        if self.sort_column == Some(column) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_column = Some(column);
            self.sort_ascending = true;
        }

        let ascending = self.sort_ascending;
        self.all_results
            .sort_by(|a, b| sorting::compare_records(a, b, column, ascending));
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.all_results.len(), PAGE_SIZE)
    }

    /// The rows the renderer shows: the current page slice, or the whole
    /// set while an exporter has the table swapped.
    pub fn visible_rows(&self) -> &[ResultRecord] {
        if self.show_all_rows {
            &self.all_results
        } else {
            pagination::page_slice(&self.all_results, self.current_page, PAGE_SIZE)
        }
    }

    /// No-op on the last page.
    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    /// No-op on page 1.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }
}
