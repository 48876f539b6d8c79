//! Field access for records.
//!
//! The engine never knows the concrete record type. It reads fields through
//! the [`Record`] trait, which is implemented here for JSON objects and can be
//! implemented by hand for caller-owned structs.

use serde_json::{Map, Value as JsonValue};

use crate::value::{Number, Value};

/// Trait for types the table engine can filter and search.
///
/// # Manual Implementation
///
/// ```
/// use gridview::{Number, Record, Value};
///
/// struct Order {
///     customer: String,
///     total: f64,
///     paid: bool,
/// }
///
/// impl Record for Order {
///     fn field(&self, key: &str) -> Value<'_> {
///         match key {
///             "customer" => Value::String(&self.customer),
///             "total" => Value::Number(Number::F64(self.total)),
///             "paid" => Value::Bool(self.paid),
///             _ => Value::None,
///         }
///     }
///
///     fn field_keys(&self) -> Vec<&str> {
///         vec!["customer", "total", "paid"]
///     }
/// }
/// ```
pub trait Record {
    /// Returns the value of a field, or [`Value::None`] if the field is
    /// missing, null, or not a scalar.
    fn field(&self, key: &str) -> Value<'_>;

    /// Returns every field key the record carries.
    ///
    /// Free-text search scans all of these, not only the fields the schema
    /// declares.
    fn field_keys(&self) -> Vec<&str>;
}

/// Converts a JSON value into a field value.
///
/// Arrays and objects are not scalars and read as [`Value::None`].
pub fn json_field(value: &JsonValue) -> Value<'_> {
    match value {
        JsonValue::String(s) => Value::String(s),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(Number::I64(i))
            } else if let Some(u) = n.as_u64() {
                Value::Number(Number::U64(u))
            } else {
                n.as_f64()
                    .map(|f| Value::Number(Number::F64(f)))
                    .unwrap_or(Value::None)
            }
        }
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => Value::None,
    }
}

impl Record for Map<String, JsonValue> {
    fn field(&self, key: &str) -> Value<'_> {
        self.get(key).map(json_field).unwrap_or(Value::None)
    }

    fn field_keys(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

/// Non-object JSON values behave as records with no fields.
impl Record for JsonValue {
    fn field(&self, key: &str) -> Value<'_> {
        match self {
            JsonValue::Object(map) => map.field(key),
            _ => Value::None,
        }
    }

    fn field_keys(&self) -> Vec<&str> {
        match self {
            JsonValue::Object(map) => map.field_keys(),
            _ => Vec::new(),
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, key: &str) -> Value<'_> {
        (**self).field(key)
    }

    fn field_keys(&self) -> Vec<&str> {
        (**self).field_keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_object_fields() {
        let row = json!({
            "name": "Ada",
            "age": 36,
            "score": 9.5,
            "active": true,
            "notes": null,
            "tags": ["a", "b"],
        });

        assert_eq!(row.field("name"), Value::String("Ada"));
        assert_eq!(row.field("age"), Value::Number(Number::I64(36)));
        assert_eq!(row.field("score"), Value::Number(Number::F64(9.5)));
        assert_eq!(row.field("active"), Value::Bool(true));
        assert_eq!(row.field("notes"), Value::None);
        assert_eq!(row.field("tags"), Value::None);
        assert_eq!(row.field("missing"), Value::None);
    }

    #[test]
    fn field_keys_lists_everything() {
        let row = json!({"b": 1, "a": "x"});
        let mut keys = row.field_keys();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn non_object_has_no_fields() {
        let row = json!(42);
        assert_eq!(row.field("anything"), Value::None);
        assert!(row.field_keys().is_empty());
    }

    #[test]
    fn large_unsigned_numbers() {
        let row = json!({"id": u64::MAX});
        assert_eq!(row.field("id"), Value::Number(Number::U64(u64::MAX)));
    }
}
