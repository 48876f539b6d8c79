//! Per-field filter values and the predicates that evaluate them.
//!
//! A [`FilterValue`] is the current setting of one filter control. Its variant
//! mirrors the [`FilterKind`] of the field it applies to, and [`matches`]
//! dispatches on it exhaustively.
//!
//! # Semantics
//!
//! | Kind | Matches when |
//! |------|--------------|
//! | `text` | stringified field contains the text, ignoring case |
//! | `select` | stringified field equals the choice |
//! | `multiSelect` | field equals any member of the set |
//! | `dateRange` | field parses as a date within the inclusive bounds |
//! | `numberRange` | field parses as a number within the inclusive bounds |
//! | `slider` | field parses as a number `>=` the threshold |
//! | `checkbox` | unchecked, or field is truthy |
//!
//! Empty values (`""`, the [`SELECT_ALL`] sentinel, an empty set, a range with
//! no bounds, an unchecked box) leave the field unconstrained. Values that
//! fail to parse under an active bound do not match. A field whose kind is
//! [`FilterKind::Unrecognized`] never constrains anything.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::{GridError, Result};
use crate::record::Record;
use crate::schema::{FieldDescriptor, FieldSchema, FilterKind, OptionValue};
use crate::search::contains_ignore_case;
use crate::value::{Number, Timestamp, Value};

/// Select value meaning "no constraint".
pub const SELECT_ALL: &str = "all";

/// The current setting of one filter control.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    /// Matches when the field's text form equals the choice exactly, so a
    /// boolean `true` or the number `2024` match `"true"` and `"2024"`.
    /// [`FilterValue::MultiSelect`] does not coerce this way.
    Select(String),
    MultiSelect(Vec<OptionValue>),
    DateRange(DateRange),
    NumberRange(NumberRange),
    Slider(f64),
    Checkbox(bool),
}

impl FilterValue {
    /// Returns the filter kind this value belongs to.
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterValue::Text(_) => FilterKind::Text,
            FilterValue::Select(_) => FilterKind::Select,
            FilterValue::MultiSelect(_) => FilterKind::MultiSelect,
            FilterValue::DateRange(_) => FilterKind::DateRange,
            FilterValue::NumberRange(_) => FilterKind::NumberRange,
            FilterValue::Slider(_) => FilterKind::Slider,
            FilterValue::Checkbox(_) => FilterKind::Checkbox,
        }
    }

    /// Returns `true` if this value places no constraint on its field.
    ///
    /// An unconstrained value is equivalent to the field being absent from
    /// the [`FilterState`].
    pub fn is_unconstrained(&self) -> bool {
        match self {
            FilterValue::Text(text) => text.is_empty(),
            FilterValue::Select(choice) => choice.is_empty() || choice == SELECT_ALL,
            FilterValue::MultiSelect(set) => set.is_empty(),
            FilterValue::DateRange(range) => range.is_open(),
            FilterValue::NumberRange(range) => range.is_open(),
            FilterValue::Slider(_) => false,
            FilterValue::Checkbox(checked) => !checked,
        }
    }

    /// Creates a multi-select value from any iterable of options.
    pub fn multi<O: Into<OptionValue>>(options: impl IntoIterator<Item = O>) -> Self {
        FilterValue::MultiSelect(options.into_iter().map(Into::into).collect())
    }
}

impl From<DateRange> for FilterValue {
    fn from(range: DateRange) -> Self {
        FilterValue::DateRange(range)
    }
}

impl From<NumberRange> for FilterValue {
    fn from(range: NumberRange) -> Self {
        FilterValue::NumberRange(range)
    }
}

/// Inclusive date bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
}

impl DateRange {
    /// Creates a range from already-parsed bounds.
    pub fn new(from: Option<Timestamp>, to: Option<Timestamp>) -> Self {
        DateRange { from, to }
    }

    /// Parses bounds from date strings.
    ///
    /// Empty strings and `None` leave that side open. Anything else must
    /// parse with [`Timestamp::parse`].
    ///
    /// ```
    /// use gridview::DateRange;
    ///
    /// let range = DateRange::parse(Some("2024-01-01"), None).unwrap();
    /// assert!(range.from.is_some());
    /// assert!(range.to.is_none());
    /// assert!(DateRange::parse(Some("yesterday"), None).is_err());
    /// ```
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Result<Self> {
        Ok(DateRange {
            from: parse_bound(from)?,
            to: parse_bound(to)?,
        })
    }

    /// Returns `true` if neither bound is set.
    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Checks a field value against the bounds.
    pub fn contains_value(&self, value: &Value<'_>) -> bool {
        if self.is_open() {
            return true;
        }
        let Some(ts) = value.to_timestamp() else {
            return false;
        };
        self.from.map_or(true, |from| ts >= from) && self.to.map_or(true, |to| ts <= to)
    }
}

fn parse_bound(bound: Option<&str>) -> Result<Option<Timestamp>> {
    match bound.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => Timestamp::parse(text)
            .map(Some)
            .ok_or_else(|| GridError::InvalidDate(text.to_string())),
    }
}

/// Inclusive numeric bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        NumberRange { min, max }
    }

    pub fn at_least(min: f64) -> Self {
        NumberRange::new(Some(min), None)
    }

    pub fn at_most(max: f64) -> Self {
        NumberRange::new(None, Some(max))
    }

    pub fn between(min: f64, max: f64) -> Self {
        NumberRange::new(Some(min), Some(max))
    }

    /// Returns `true` if neither bound is set.
    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Checks a parsed number against the bounds. `NaN` fails any active bound.
    pub fn contains(&self, n: f64) -> bool {
        self.min.map_or(true, |min| n >= min) && self.max.map_or(true, |max| n <= max)
    }
}

/// Evaluates one filter against one record.
///
/// Never panics. A value whose kind disagrees with the descriptor is treated
/// as malformed and does not match; a descriptor of unrecognized kind matches
/// everything.
///
/// ```
/// use gridview::{matches, FieldDescriptor, FilterValue, NumberRange};
/// use serde_json::json;
///
/// let amount = FieldDescriptor::number_range("a", "Amount");
/// let filter = FilterValue::from(NumberRange::at_least(2.0));
/// assert!(!matches(&json!({"a": 1}), &amount, &filter));
/// assert!(matches(&json!({"a": 2}), &amount, &filter));
/// assert!(!matches(&json!({"a": "n/a"}), &amount, &filter));
/// ```
pub fn matches<R: Record + ?Sized>(
    record: &R,
    descriptor: &FieldDescriptor,
    value: &FilterValue,
) -> bool {
    if descriptor.kind == FilterKind::Unrecognized {
        return true;
    }
    if value.kind() != descriptor.kind {
        return false;
    }

    let field = record.field(&descriptor.key);
    match value {
        FilterValue::Text(text) => {
            text.is_empty() || contains_ignore_case(&field.to_text(), text)
        }
        FilterValue::Select(choice) => {
            choice.is_empty() || choice == SELECT_ALL || field.to_text() == choice.as_str()
        }
        FilterValue::MultiSelect(set) => {
            set.is_empty() || set.iter().any(|option| option_matches(option, &field))
        }
        FilterValue::DateRange(range) => range.contains_value(&field),
        FilterValue::NumberRange(range) => range.is_open() || range.contains(field.to_f64()),
        FilterValue::Slider(threshold) => field.to_f64() >= *threshold,
        FilterValue::Checkbox(checked) => !checked || field.is_truthy(),
    }
}

fn option_matches(option: &OptionValue, field: &Value<'_>) -> bool {
    match (option, field) {
        (OptionValue::Text(choice), Value::String(s)) => choice == s,
        (OptionValue::Number(choice), Value::Number(n)) => {
            n.compare(Number::F64(*choice)) == Some(Ordering::Equal)
        }
        _ => false,
    }
}

/// Evaluates every schema field that has a value in `state`.
///
/// Filters combine with AND. State entries for keys the schema does not
/// declare are ignored.
pub fn matches_all<R: Record + ?Sized>(
    record: &R,
    schema: &FieldSchema,
    state: &FilterState,
) -> bool {
    schema.iter().all(|descriptor| {
        state
            .get(&descriptor.key)
            .map_or(true, |value| matches(record, descriptor, value))
    })
}

/// The active filter values of a table, keyed by field.
///
/// Only constrained values are stored: setting an unconstrained value removes
/// the key, so an empty state means "no filters".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    values: BTreeMap<String, FilterValue>,
}

impl FilterState {
    /// Creates an empty state.
    pub fn new() -> Self {
        FilterState::default()
    }

    /// Sets the value for `key`, or removes it if the value is unconstrained.
    ///
    /// Returns `true` if the state changed.
    pub fn set(&mut self, key: impl Into<String>, value: FilterValue) -> bool {
        let key = key.into();
        if value.is_unconstrained() {
            return self.values.remove(&key).is_some();
        }
        match self.values.get(&key) {
            Some(existing) if *existing == value => false,
            _ => {
                self.values.insert(key, value);
                true
            }
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: FilterValue) -> Self {
        self.set(key, value);
        self
    }

    /// Removes the value for `key`, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<FilterValue> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of fields currently constrained.
    pub fn active_count(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Describes the active filters in schema order, e.g.
    /// `Status = open, Amount ≥ 10`.
    ///
    /// Returns `None` when no schema field is constrained.
    pub fn summary(&self, schema: &FieldSchema) -> Option<String> {
        let parts: Vec<String> = schema
            .iter()
            .filter(|d| d.kind != FilterKind::Unrecognized)
            .filter_map(|d| self.get(&d.key).map(|v| describe(&d.label, v)))
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

fn describe(label: &str, value: &FilterValue) -> String {
    match value {
        FilterValue::Text(text) => format!("{} contains \"{}\"", label, text),
        FilterValue::Select(choice) => format!("{} = {}", label, choice),
        FilterValue::MultiSelect(set) => {
            let items: Vec<String> = set.iter().map(ToString::to_string).collect();
            format!("{} in [{}]", label, items.join(", "))
        }
        FilterValue::DateRange(range) => match (range.from, range.to) {
            (Some(from), Some(to)) => format!("{} from {} to {}", label, from, to),
            (Some(from), None) => format!("{} from {}", label, from),
            (None, Some(to)) => format!("{} until {}", label, to),
            (None, None) => label.to_string(),
        },
        FilterValue::NumberRange(range) => match (range.min, range.max) {
            (Some(min), Some(max)) => format!("{} between {} and {}", label, min, max),
            (Some(min), None) => format!("{} ≥ {}", label, min),
            (None, Some(max)) => format!("{} ≤ {}", label, max),
            (None, None) => label.to_string(),
        },
        FilterValue::Slider(threshold) => format!("{} ≥ {}", label, threshold),
        FilterValue::Checkbox(_) => label.to_string(),
    }
}
