//! Gridview - Filter, search and pagination engine for in-memory record tables.
//!
//! Gridview is the data side of a dashboard table. The host hands it a record
//! collection and a field schema; it hands back the filtered, paginated view
//! and the page-number window for the pager. It supports:
//!
//! - Seven filter kinds: text, select, multi-select, date range, number range,
//!   slider, and checkbox
//! - Free-text search across every field of a record
//! - Pagination with a clamped current page and an ellipsized page window
//! - An explicit view state driven by a pure reducer
//!
//! Everything runs synchronously over the records in memory. Where the records
//! come from and how the view is drawn are the host's business.
//!
//! # Quick Start
//!
//! ```rust
//! use gridview::{
//!     FieldDescriptor, FieldSchema, FilterValue, NumberRange, TableController, ViewConfig,
//! };
//! use serde_json::json;
//!
//! let schema = FieldSchema::new()
//!     .field(FieldDescriptor::text("customer", "Customer"))
//!     .field(FieldDescriptor::number_range("total", "Total"))
//!     .field(FieldDescriptor::checkbox("paid", "Paid"));
//!
//! let mut orders = TableController::new(schema, ViewConfig::named("orders"));
//! orders.replace_records(vec![
//!     json!({"customer": "Acme", "total": 120.0, "paid": true}),
//!     json!({"customer": "Globex", "total": 80.0, "paid": true}),
//!     json!({"customer": "Initech", "total": 300.0, "paid": false}),
//! ]);
//!
//! orders.set_filter_value("total", NumberRange::at_least(100.0).into());
//! orders.set_filter_value("paid", FilterValue::Checkbox(true));
//!
//! let view = orders.view();
//! assert_eq!(view.total_count, 1);
//! assert_eq!(view.page_records[0]["customer"], "Acme");
//! ```
//!
//! # Match Semantics
//!
//! ```text
//! match = (every constrained schema field matches its filter)
//!       ∧ (search term is empty, or some field contains it)
//! ```
//!
//! Filters never error on bad data. A value that cannot be parsed under an
//! active range bound simply does not match; see [`filter`] for the per-kind
//! rules.

mod config;
mod controller;
mod error;
pub mod filter;
pub mod paginate;
mod record;
mod schema;
mod search;
mod state;
mod value;

// Re-export public API
pub use config::{ViewConfig, DEFAULT_PAGE_SIZE};
pub use controller::{derive, filter_indices, record_matches, DerivedView, TableController};
pub use error::{GridError, Result};
pub use filter::{
    matches, matches_all, DateRange, FilterState, FilterValue, NumberRange, SELECT_ALL,
};
pub use paginate::{PageInfo, PageMarker};
pub use record::{json_field, Record};
pub use schema::{FieldDescriptor, FieldSchema, FilterKind, OptionValue};
pub use search::search_matches;
pub use state::{Action, ViewState};
pub use value::{Number, Timestamp, Value};
