//! Gridview Export - CSV and JSON downloads of a gridview table.
//!
//! Exports always cover the table's filtered set across every page, never
//! just the visible page. CSV output is limited to a list of display columns
//! and quotes every cell; JSON output carries whole records.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use gridview::{FieldDescriptor, FieldSchema, TableController, ViewConfig};
//! use gridview_export::{ExportFormat, Exporter};
//! use serde_json::json;
//!
//! let schema = FieldSchema::new().field(FieldDescriptor::text("name", "Name"));
//! let table = TableController::new(schema, ViewConfig::named("people"))
//!     .with_records(vec![json!({"name": "Ada"})]);
//!
//! let file = Exporter::for_table(&table)
//!     .dated(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
//!     .export_table(&table, ExportFormat::Csv)
//!     .unwrap();
//!
//! assert_eq!(file.file_name, "people_2024-01-15.csv");
//! assert_eq!(file.text(), "\"Name\"\n\"Ada\"\n");
//! ```

mod column;
mod csv_export;
mod error;
mod exporter;
mod format;
mod json_export;
mod sink;

pub use column::Column;
pub use csv_export::to_csv;
pub use error::{ExportError, Result};
pub use exporter::Exporter;
pub use format::{export_file_name, today, ExportFile, ExportFormat};
pub use json_export::to_json;
pub use sink::{DirectorySink, ExportSink, MemorySink};
