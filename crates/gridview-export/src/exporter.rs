//! Building export files from a record set.

use crate::column::Column;
use crate::csv_export::to_csv;
use crate::error::Result;
use crate::format::{export_file_name, today, ExportFile, ExportFormat};
use crate::json_export::to_json;
use crate::sink::ExportSink;
use chrono::NaiveDate;
use gridview::{Record, TableController};
use serde::Serialize;

/// Turns records into named [`ExportFile`]s.
///
/// CSV output is limited to the configured columns; JSON output carries whole
/// records. The file name is stamped with the exporter's date, which defaults
/// to today in UTC.
#[derive(Debug, Clone)]
pub struct Exporter {
    table_name: String,
    columns: Vec<Column>,
    date: NaiveDate,
}

impl Exporter {
    pub fn new(table_name: impl Into<String>, columns: Vec<Column>) -> Self {
        Exporter {
            table_name: table_name.into(),
            columns,
            date: today(),
        }
    }

    /// An exporter named after the table's config with one column per
    /// schema field.
    pub fn for_table<R: Record>(table: &TableController<R>) -> Self {
        Exporter::new(
            table.config().table_name.clone(),
            Column::from_schema(table.schema()),
        )
    }

    /// Replaces the columns.
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Stamps file names with `date` instead of today.
    pub fn dated(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn file_name(&self, format: ExportFormat) -> String {
        export_file_name(&self.table_name, self.date, format)
    }

    pub fn csv<'r, R, I>(&self, records: I) -> Result<ExportFile>
    where
        R: Record + ?Sized + 'r,
        I: IntoIterator<Item = &'r R>,
    {
        let bytes = to_csv(records, &self.columns)?;
        Ok(self.file(ExportFormat::Csv, bytes))
    }

    pub fn json<'r, R, I>(&self, records: I) -> Result<ExportFile>
    where
        R: Serialize + ?Sized + 'r,
        I: IntoIterator<Item = &'r R>,
    {
        let bytes = to_json(records)?;
        Ok(self.file(ExportFormat::Json, bytes))
    }

    pub fn export<'r, R, I>(&self, records: I, format: ExportFormat) -> Result<ExportFile>
    where
        R: Record + Serialize + ?Sized + 'r,
        I: IntoIterator<Item = &'r R>,
    {
        match format {
            ExportFormat::Csv => self.csv(records),
            ExportFormat::Json => self.json(records),
        }
    }

    /// Exports the table's current filtered set, across every page.
    pub fn export_table<R>(
        &self,
        table: &TableController<R>,
        format: ExportFormat,
    ) -> Result<ExportFile>
    where
        R: Record + Serialize,
    {
        let records = table.filtered_records();
        tracing::debug!(
            table = %self.table_name,
            %format,
            count = records.len(),
            "exporting filtered records"
        );
        self.export(records, format)
    }

    /// Exports and hands the file to `sink` once.
    pub fn save_table<R, S>(
        &self,
        table: &TableController<R>,
        format: ExportFormat,
        sink: &mut S,
    ) -> Result<ExportFile>
    where
        R: Record + Serialize,
        S: ExportSink + ?Sized,
    {
        let file = self.export_table(table, format)?;
        sink.save(&file)?;
        Ok(file)
    }

    fn file(&self, format: ExportFormat, bytes: Vec<u8>) -> ExportFile {
        ExportFile {
            file_name: self.file_name(format),
            content_type: format.content_type(),
            bytes,
        }
    }
}
