//! Export columns.

use gridview::{FieldDescriptor, FieldSchema};

/// One CSV column: the record key to read and the header label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Column {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Columns for every field of a schema, in schema order.
    pub fn from_schema(schema: &FieldSchema) -> Vec<Column> {
        schema.iter().map(Column::from).collect()
    }
}

impl From<&FieldDescriptor> for Column {
    fn from(descriptor: &FieldDescriptor) -> Self {
        Column::new(&descriptor.key, &descriptor.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_columns_keep_order_and_labels() {
        let schema = FieldSchema::new()
            .field(FieldDescriptor::text("name", "Name"))
            .field(FieldDescriptor::checkbox("vip", "VIP"));
        assert_eq!(
            Column::from_schema(&schema),
            vec![Column::new("name", "Name"), Column::new("vip", "VIP")]
        );
    }
}
