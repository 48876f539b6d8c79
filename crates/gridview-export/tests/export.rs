//! Export of filtered tables to CSV and JSON.

use chrono::NaiveDate;
use gridview::{FieldDescriptor, FieldSchema, FilterValue, TableController, ViewConfig};
use gridview_export::{
    Column, DirectorySink, ExportError, ExportFile, ExportFormat, ExportSink, Exporter,
    MemorySink,
};
use serde_json::{json, Value as Json};

// ============================================================================
// Fixtures
// ============================================================================

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn inventory() -> TableController<Json> {
    let schema = FieldSchema::new()
        .field(FieldDescriptor::text("item", "Item"))
        .field(FieldDescriptor::number_range("qty", "Quantity"))
        .field(FieldDescriptor::checkbox("stocked", "In stock"));
    TableController::new(schema, ViewConfig::named("inventory").page_size(1)).with_records(vec![
        json!({"item": "Widget, large", "qty": 3, "stocked": true, "sku": "W-1"}),
        json!({"item": "Gadget \"pro\"", "qty": null, "stocked": true}),
        json!({"item": "Gizmo", "qty": 0, "stocked": false}),
    ])
}

// ============================================================================
// CSV
// ============================================================================

#[test]
fn exporter_for_table_uses_config_name_and_schema_columns() {
    let exporter = Exporter::for_table(&inventory());
    assert_eq!(exporter.table_name(), "inventory");
    let labels: Vec<&str> = exporter.columns().iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Item", "Quantity", "In stock"]);

    let narrowed = exporter.with_columns(vec![Column::new("item", "Item")]);
    assert_eq!(narrowed.columns(), &[Column::new("item", "Item")]);
}

#[test]
fn csv_has_header_and_one_line_per_record() {
    let table = inventory();
    let file = Exporter::for_table(&table)
        .dated(day())
        .export_table(&table, ExportFormat::Csv)
        .unwrap();

    assert_eq!(file.file_name, "inventory_2024-01-15.csv");
    assert_eq!(file.content_type, "text/csv;charset=utf-8");
    insta::assert_snapshot!(file.text(), @r#"
    "Item","Quantity","In stock"
    "Widget, large","3","true"
    "Gadget ""pro""","","true"
    "Gizmo","0","false"
    "#);
}

#[test]
fn export_covers_every_page_of_the_filtered_set() {
    let mut table = inventory();
    table.set_filter_value("stocked", FilterValue::Checkbox(true));
    table.set_page(2);
    assert_eq!(table.page_records().len(), 1);

    let file = Exporter::new("stock", vec![Column::new("item", "Item")])
        .dated(day())
        .export_table(&table, ExportFormat::Csv)
        .unwrap();
    assert_eq!(file.text(), "\"Item\"\n\"Widget, large\"\n\"Gadget \"\"pro\"\"\"\n");
}

#[test]
fn two_records_three_columns() {
    let records = vec![
        json!({"a": 1, "b": "x", "c": true}),
        json!({"a": 2, "b": "y", "c": false}),
    ];
    let columns = vec![
        Column::new("a", "A"),
        Column::new("b", "B"),
        Column::new("c", "C"),
    ];
    let file = Exporter::new("t", columns).dated(day()).csv(&records).unwrap();
    let text = file.text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.split(',').count(), 3);
        assert!(line.starts_with('"') && line.ends_with('"'));
    }
}

#[test]
fn empty_filtered_set_exports_header_only() {
    let mut table = inventory();
    table.set_search_term("nothing matches this");
    let file = Exporter::for_table(&table)
        .dated(day())
        .export_table(&table, ExportFormat::Csv)
        .unwrap();
    assert_eq!(file.text(), "\"Item\",\"Quantity\",\"In stock\"\n");
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn json_carries_whole_records() {
    let mut table = inventory();
    table.set_search_term("widget");
    let file = Exporter::for_table(&table)
        .dated(day())
        .export_table(&table, ExportFormat::Json)
        .unwrap();

    assert_eq!(file.file_name, "inventory_2024-01-15.json");
    assert_eq!(file.content_type, "application/json");
    let parsed: Json = serde_json::from_slice(&file.bytes).unwrap();
    assert_eq!(
        parsed,
        json!([{"item": "Widget, large", "qty": 3, "stocked": true, "sku": "W-1"}])
    );
    assert!(file.text().contains("\n  {\n"));
}

#[test]
fn empty_json_export_is_empty_array() {
    let mut table = inventory();
    table.set_search_term("nothing matches this");
    let file = Exporter::for_table(&table)
        .dated(day())
        .export_table(&table, ExportFormat::Json)
        .unwrap();
    assert_eq!(file.text(), "[]");
}

// ============================================================================
// Sinks
// ============================================================================

#[test]
fn directory_sink_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = DirectorySink::new(dir.path());
    assert_eq!(sink.dir(), dir.path());
    let table = inventory();

    let file = Exporter::for_table(&table)
        .dated(day())
        .save_table(&table, ExportFormat::Csv, &mut sink)
        .unwrap();

    assert_eq!(sink.path_for(&file), dir.path().join("inventory_2024-01-15.csv"));
    let written = std::fs::read(sink.path_for(&file)).unwrap();
    assert_eq!(written, file.bytes);
}

#[test]
fn directory_sink_reports_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = DirectorySink::new(dir.path().join("missing"));
    let file = ExportFile {
        file_name: "t.csv".into(),
        content_type: ExportFormat::Csv.content_type(),
        bytes: Vec::new(),
    };
    assert!(matches!(sink.save(&file), Err(ExportError::Io(_))));
}

#[test]
fn each_export_is_saved_once() {
    let table = inventory();
    let exporter = Exporter::for_table(&table).dated(day());
    let mut sink = MemorySink::new();

    exporter
        .save_table(&table, ExportFormat::Csv, &mut sink)
        .unwrap();
    exporter
        .save_table(&table, ExportFormat::Json, &mut sink)
        .unwrap();

    let names: Vec<&str> = sink.files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["inventory_2024-01-15.csv", "inventory_2024-01-15.json"]
    );
}
