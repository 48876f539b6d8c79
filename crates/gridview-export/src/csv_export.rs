//! CSV rendering of records.
//!
//! Every cell, header included, is wrapped in double quotes with embedded
//! quotes doubled. Rows end in a bare `\n`.

use crate::column::Column;
use crate::error::{ExportError, Result};
use gridview::Record;

/// Renders a header row of column labels followed by one row per record.
///
/// Cells use the record's text form of the field, so a missing field is an
/// empty quoted cell.
pub fn to_csv<'r, R, I>(records: I, columns: &[Column]) -> Result<Vec<u8>>
where
    R: Record + ?Sized + 'r,
    I: IntoIterator<Item = &'r R>,
{
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(columns.iter().map(|c| c.label.as_str()))?;
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|c| record.field(&c.key).to_text().into_owned())
            .collect();
        wtr.write_record(&row)?;
    }

    wtr.into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(records: &[serde_json::Value], columns: &[Column]) -> String {
        String::from_utf8(to_csv(records, columns).unwrap()).unwrap()
    }

    #[test]
    fn quotes_every_cell() {
        let out = render(
            &[json!({"a": 1, "b": "x"})],
            &[Column::new("a", "A"), Column::new("b", "B")],
        );
        assert_eq!(out, "\"A\",\"B\"\n\"1\",\"x\"\n");
    }

    #[test]
    fn doubles_embedded_quotes() {
        let out = render(&[json!({"q": "say \"hi\""})], &[Column::new("q", "Q")]);
        assert_eq!(out, "\"Q\"\n\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn missing_and_null_fields_are_empty() {
        let out = render(
            &[json!({"a": null})],
            &[Column::new("a", "A"), Column::new("b", "B")],
        );
        assert_eq!(out, "\"A\",\"B\"\n\"\",\"\"\n");
    }

    #[test]
    fn no_records_gives_header_only() {
        let out = render(&[], &[Column::new("a", "A")]);
        assert_eq!(out, "\"A\"\n");
    }

    #[test]
    fn integral_floats_print_without_fraction() {
        let out = render(&[json!({"n": 50000.0, "f": 2.5})], &[
            Column::new("n", "N"),
            Column::new("f", "F"),
        ]);
        assert_eq!(out, "\"N\",\"F\"\n\"50000\",\"2.5\"\n");
    }
}
