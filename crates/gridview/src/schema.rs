//! Field schema: which fields a table can filter on, and how.
//!
//! A [`FieldSchema`] is an ordered list of [`FieldDescriptor`]s. Schemas are
//! usually declared in code with the descriptor constructors, but they also
//! deserialize from YAML or JSON:
//!
//! ```yaml
//! - key: status
//!   label: Status
//!   kind: select
//!   options: [open, closed]
//! - key: amount
//!   label: Amount
//!   kind: slider
//!   min: 0
//!   max: 1000
//!   step: 10
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// The filter control attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    /// Case-insensitive substring match.
    Text,
    /// Single choice out of `options`.
    Select,
    /// Any of several choices out of `options`.
    MultiSelect,
    /// Inclusive date bounds.
    DateRange,
    /// Inclusive numeric bounds.
    NumberRange,
    /// Numeric lower threshold.
    Slider,
    /// Field must be truthy when checked.
    Checkbox,
    /// A kind this version does not know. Filters on it match everything.
    #[serde(other)]
    Unrecognized,
}

impl FilterKind {
    /// Returns the schema name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Text => "text",
            FilterKind::Select => "select",
            FilterKind::MultiSelect => "multiSelect",
            FilterKind::DateRange => "dateRange",
            FilterKind::NumberRange => "numberRange",
            FilterKind::Slider => "slider",
            FilterKind::Checkbox => "checkbox",
            FilterKind::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A choice offered by `select` and `multiSelect` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Numeric option.
    Number(f64),
    /// Text option.
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{}", crate::value::Number::F64(*n)),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<f64> for OptionValue {
    fn from(n: f64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n as f64)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Number(n as f64)
    }
}

/// Describes one filterable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Record key the filter reads.
    pub key: String,
    /// Human-readable name, also used as the CSV header.
    pub label: String,
    /// Filter control for the field.
    pub kind: FilterKind,
    /// Choices for `select` and `multiSelect`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionValue>>,
    /// Slider lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Slider upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Slider increment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl FieldDescriptor {
    /// Creates a descriptor with no options or bounds.
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FilterKind) -> Self {
        FieldDescriptor {
            key: key.into(),
            label: label.into(),
            kind,
            options: None,
            min: None,
            max: None,
            step: None,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FilterKind::Text)
    }

    pub fn select<O: Into<OptionValue>>(
        key: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = O>,
    ) -> Self {
        Self::new(key, label, FilterKind::Select).with_options(options)
    }

    pub fn multi_select<O: Into<OptionValue>>(
        key: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = O>,
    ) -> Self {
        Self::new(key, label, FilterKind::MultiSelect).with_options(options)
    }

    pub fn date_range(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FilterKind::DateRange)
    }

    pub fn number_range(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FilterKind::NumberRange)
    }

    pub fn slider(
        key: impl Into<String>,
        label: impl Into<String>,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self {
        FieldDescriptor {
            min: Some(min),
            max: Some(max),
            step: Some(step),
            ..Self::new(key, label, FilterKind::Slider)
        }
    }

    pub fn checkbox(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FilterKind::Checkbox)
    }

    /// Replaces the option list.
    pub fn with_options<O: Into<OptionValue>>(
        mut self,
        options: impl IntoIterator<Item = O>,
    ) -> Self {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Checks that the descriptor carries what its kind needs.
    pub fn validate(&self) -> Result<()> {
        match self.kind {
            FilterKind::Select | FilterKind::MultiSelect => {
                if self.options.as_ref().map_or(true, |o| o.is_empty()) {
                    return Err(GridError::MissingOptions {
                        key: self.key.clone(),
                        kind: self.kind.as_str(),
                    });
                }
            }
            FilterKind::Slider => {
                if self.min.is_none() || self.max.is_none() || self.step.is_none() {
                    return Err(GridError::MissingSliderBounds {
                        key: self.key.clone(),
                    });
                }
            }
            FilterKind::Unrecognized => {
                tracing::warn!(
                    key = %self.key,
                    "unrecognized filter kind, field will not constrain results"
                );
            }
            FilterKind::Text
            | FilterKind::DateRange
            | FilterKind::NumberRange
            | FilterKind::Checkbox => {}
        }
        Ok(())
    }
}

/// Ordered list of field descriptors for one table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSchema {
    fields: Vec<FieldDescriptor>,
}

impl FieldSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        FieldSchema::default()
    }

    /// Appends a descriptor.
    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    /// Parses a schema from a YAML (or JSON) document and validates it.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let schema: FieldSchema = serde_yaml::from_str(source)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Looks up a descriptor by key.
    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates every descriptor and rejects duplicate keys.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.key.as_str()) {
                return Err(GridError::DuplicateKey(field.key.clone()));
            }
            field.validate()?;
        }
        Ok(())
    }
}

impl FromIterator<FieldDescriptor> for FieldSchema {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        FieldSchema {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FieldSchema {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
