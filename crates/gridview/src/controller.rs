//! Table controller: records + schema + view state → derived view.
//!
//! The controller owns the record collection and the [`ViewState`] of one
//! table. Every transition runs synchronously: the reducer updates the state,
//! the filtered index list is rebuilt if the search term or filters changed,
//! and the current page is clamped to the new page count.
//!
//! # Example
//!
//! ```
//! use gridview::{FieldDescriptor, FieldSchema, FilterValue, TableController, ViewConfig};
//! use serde_json::json;
//!
//! let schema = FieldSchema::new()
//!     .field(FieldDescriptor::select("status", "Status", ["open", "closed"]));
//!
//! let mut table = TableController::new(schema, ViewConfig::named("tickets").page_size(2));
//! table.replace_records(vec![
//!     json!({"id": 1, "status": "open", "title": "Printer jam"}),
//!     json!({"id": 2, "status": "closed", "title": "VPN down"}),
//!     json!({"id": 3, "status": "open", "title": "New laptop"}),
//!     json!({"id": 4, "status": "open", "title": "Printer toner"}),
//! ]);
//!
//! table.set_filter_value("status", FilterValue::Select("open".into()));
//! assert_eq!(table.total_count(), 3);
//! assert_eq!(table.total_pages(), 2);
//!
//! table.set_search_term("printer");
//! let view = table.view();
//! assert_eq!(view.total_count, 2);
//! assert_eq!(view.page_records.len(), 2);
//! ```

use crate::config::ViewConfig;
use crate::filter::{matches_all, FilterState, FilterValue};
use crate::paginate::{self, PageInfo, PageMarker};
use crate::record::Record;
use crate::schema::FieldSchema;
use crate::search::search_matches;
use crate::state::{Action, ViewState};

/// The filtered, paginated projection of a table.
#[derive(Debug)]
pub struct DerivedView<'a, R> {
    /// Every record passing search and filters, in input order.
    pub filtered_records: Vec<&'a R>,
    /// `filtered_records.len()`.
    pub total_count: usize,
    /// The slice of `filtered_records` on the current page.
    pub page_records: Vec<&'a R>,
    pub total_pages: usize,
    /// The clamped current page.
    pub current_page: usize,
}

// Manual impl: derive would require `R: Clone`.
impl<R> Clone for DerivedView<'_, R> {
    fn clone(&self) -> Self {
        DerivedView {
            filtered_records: self.filtered_records.clone(),
            total_count: self.total_count,
            page_records: self.page_records.clone(),
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }
}

/// Returns `true` if `record` passes both the search term and every filter.
pub fn record_matches<R: Record + ?Sized>(
    record: &R,
    schema: &FieldSchema,
    search_term: &str,
    filters: &FilterState,
) -> bool {
    matches_all(record, schema, filters) && search_matches(record, search_term)
}

/// Indices of the records that match `state`, in input order.
pub fn filter_indices<R: Record>(
    records: &[R],
    schema: &FieldSchema,
    state: &ViewState,
) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(*record, schema, &state.search_term, &state.filters))
        .map(|(index, _)| index)
        .collect()
}

/// Computes the derived view of `records` under `state`.
///
/// Pure: the same inputs always give the same view. The requested page is
/// clamped into range.
pub fn derive<'a, R: Record>(
    records: &'a [R],
    schema: &FieldSchema,
    state: &ViewState,
) -> DerivedView<'a, R> {
    let filtered: Vec<&'a R> = filter_indices(records, schema, state)
        .into_iter()
        .map(|index| &records[index])
        .collect();
    build_view(filtered, state.current_page, state.page_size)
}

fn build_view<R>(filtered: Vec<&R>, page: usize, page_size: usize) -> DerivedView<'_, R> {
    let total_count = filtered.len();
    let total_pages = paginate::total_pages(total_count, page_size);
    let current_page = paginate::clamp_page(page, total_pages);
    let page_records = paginate::page_slice(&filtered, current_page, page_size).to_vec();
    DerivedView {
        filtered_records: filtered,
        total_count,
        page_records,
        total_pages,
        current_page,
    }
}

/// Owns one table's records and view state.
#[derive(Debug, Clone)]
pub struct TableController<R> {
    records: Vec<R>,
    schema: FieldSchema,
    config: ViewConfig,
    state: ViewState,
    filtered: Vec<usize>,
}

impl<R: Record> TableController<R> {
    /// Creates a controller with no records.
    pub fn new(schema: FieldSchema, config: ViewConfig) -> Self {
        let state = ViewState::new(config.page_size);
        TableController {
            records: Vec::new(),
            schema,
            config,
            state,
            filtered: Vec::new(),
        }
    }

    /// Builder-style [`replace_records`](Self::replace_records).
    pub fn with_records(mut self, records: Vec<R>) -> Self {
        self.replace_records(records);
        self
    }

    /// Applies a state transition.
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "table action");
        if self.state.apply(action) {
            self.refilter();
        }
        self.clamp_page();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.dispatch(Action::SetSearchTerm(term.into()));
    }

    /// Sets one field's filter. An unconstrained value removes the filter.
    pub fn set_filter_value(&mut self, key: impl Into<String>, value: FilterValue) {
        self.dispatch(Action::SetFilterValue {
            key: key.into(),
            value,
        });
    }

    pub fn clear_filter(&mut self, key: impl Into<String>) {
        self.dispatch(Action::ClearFilter(key.into()));
    }

    /// Removes every filter. The search term is kept.
    pub fn reset_filters(&mut self) {
        self.dispatch(Action::ResetFilters);
    }

    /// Jumps to `page`, clamped to `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.dispatch(Action::SetPage(page));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.state.current_page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.state.current_page.saturating_sub(1));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.dispatch(Action::SetPageSize(page_size));
    }

    /// Clears search and filters and returns to page 1.
    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }

    /// Replaces the record collection wholesale.
    ///
    /// The view state survives: search and filters are re-applied to the new
    /// records, and the current page is clamped if the result shrank.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.refilter();
        self.clamp_page();
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Every matching record, in input order, across all pages.
    pub fn filtered_records(&self) -> Vec<&R> {
        self.filtered.iter().map(|&index| &self.records[index]).collect()
    }

    pub fn total_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.filtered.len(), self.state.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    /// Records on the current page.
    pub fn page_records(&self) -> Vec<&R> {
        paginate::page_slice(&self.filtered, self.state.current_page, self.state.page_size)
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    /// The full derived view for the display layer.
    pub fn view(&self) -> DerivedView<'_, R> {
        build_view(
            self.filtered_records(),
            self.state.current_page,
            self.state.page_size,
        )
    }

    /// Page numbers to render around the current page.
    pub fn page_window(&self) -> Vec<PageMarker> {
        paginate::page_window(
            self.state.current_page,
            self.total_pages(),
            self.config.window_radius,
        )
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(
            self.state.current_page,
            self.state.page_size,
            self.filtered.len(),
        )
    }

    /// Human-readable description of the active filters.
    pub fn filter_summary(&self) -> Option<String> {
        self.state.filters.summary(&self.schema)
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(&self.records, &self.schema, &self.state);
        tracing::debug!(
            table = %self.config.table_name,
            records = self.records.len(),
            matched = self.filtered.len(),
            "recomputed table view"
        );
    }

    fn clamp_page(&mut self) {
        let total_pages = self.total_pages();
        self.state.current_page = paginate::clamp_page(self.state.current_page, total_pages);
    }
}
