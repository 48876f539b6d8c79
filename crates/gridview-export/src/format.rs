//! Export formats and the produced file.

use chrono::{NaiveDate, Utc};
use std::fmt;

/// File format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A finished export, ready to hand to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Contents as text. Both formats are UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// `{table}_{YYYY-MM-DD}.{ext}`
pub fn export_file_name(table_name: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        table_name,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Today's date in UTC, used to stamp export file names.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn file_name_is_zero_padded() {
        assert_eq!(
            export_file_name("orders", day(), ExportFormat::Csv),
            "orders_2024-03-07.csv"
        );
        assert_eq!(
            export_file_name("orders", day(), ExportFormat::Json),
            "orders_2024-03-07.json"
        );
    }

    #[test]
    fn content_types() {
        assert_eq!(ExportFormat::Csv.content_type(), "text/csv;charset=utf-8");
        assert_eq!(ExportFormat::Json.content_type(), "application/json");
    }
}
