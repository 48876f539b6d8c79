//! View state and the reducer that drives it.
//!
//! [`ViewState`] is everything a table view remembers between renders. It only
//! changes through [`Action`]s, so every transition can be tested without a
//! record collection or a rendering layer.

use crate::config::DEFAULT_PAGE_SIZE;
use crate::filter::{FilterState, FilterValue};

/// Search term, filters, and pagination of one table view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub search_term: String,
    pub filters: FilterState,
    /// Requested page, 1-based. The controller clamps it to the page count.
    pub current_page: usize,
    /// Rows per page, never zero.
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(DEFAULT_PAGE_SIZE)
    }
}

/// A state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the search term. Resets to page 1.
    SetSearchTerm(String),
    /// Set one field's filter; unconstrained values remove it. Resets to page 1.
    SetFilterValue { key: String, value: FilterValue },
    /// Remove one field's filter. Resets to page 1.
    ClearFilter(String),
    /// Remove every filter, keeping the search term. Resets to page 1.
    ResetFilters,
    /// Jump to a page.
    SetPage(usize),
    /// Change rows per page. Resets to page 1.
    SetPageSize(usize),
    /// Clear search and filters and return to page 1, keeping the page size.
    Reset,
}

impl ViewState {
    /// Creates an unfiltered state on page 1.
    pub fn new(page_size: usize) -> Self {
        ViewState {
            search_term: String::new(),
            filters: FilterState::new(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Applies an action and returns the new state.
    pub fn reduce(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }

    /// Applies an action in place.
    ///
    /// Returns `true` if the set of matching records may have changed, i.e.
    /// the search term or filters are different from before.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::SetSearchTerm(term) => {
                self.current_page = 1;
                if self.search_term == term {
                    return false;
                }
                self.search_term = term;
                true
            }
            Action::SetFilterValue { key, value } => {
                self.current_page = 1;
                self.filters.set(key, value)
            }
            Action::ClearFilter(key) => {
                self.current_page = 1;
                self.filters.remove(&key).is_some()
            }
            Action::ResetFilters => {
                self.current_page = 1;
                let changed = !self.filters.is_empty();
                self.filters.clear();
                changed
            }
            Action::SetPage(page) => {
                self.current_page = page.max(1);
                false
            }
            Action::SetPageSize(size) => {
                self.page_size = size.max(1);
                self.current_page = 1;
                false
            }
            Action::Reset => {
                self.current_page = 1;
                let changed = !self.search_term.is_empty() || !self.filters.is_empty();
                self.search_term.clear();
                self.filters.clear();
                changed
            }
        }
    }
}
