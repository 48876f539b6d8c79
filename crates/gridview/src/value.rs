//! Runtime value types for field comparison.
//!
//! The [`Value`] enum represents a single scalar read from a record. Every
//! filter kind and the free-text search work off this one representation, so
//! the coercion rules (stringification, numeric parsing, date parsing,
//! truthiness) live here.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Runtime value of a record field, borrowed from the record.
///
/// # Example
///
/// ```
/// use gridview::{Number, Value};
///
/// assert_eq!(Value::String("Widget").to_text(), "Widget");
/// assert_eq!(Value::Number(Number::F64(2.0)).to_text(), "2");
/// assert_eq!(Value::None.to_text(), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Field not present, null, or not a scalar.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(*s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Renders the value as display text.
    ///
    /// Strings are returned as-is, integral numbers drop their fractional
    /// part, and a missing value renders as the empty string.
    pub fn to_text(&self) -> Cow<'a, str> {
        match self {
            Value::String(s) => Cow::Borrowed(*s),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::None => Cow::Borrowed(""),
        }
    }

    /// Parses the value as a float.
    ///
    /// Returns `NaN` for anything that is not a number or a finite numeric
    /// string, so any ordered comparison against the result is `false`.
    /// Strings such as `"inf"` or `"NaN"` count as unparsable.
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Number(n) => n.to_f64(),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .unwrap_or(f64::NAN),
            Value::Bool(_) | Value::None => f64::NAN,
        }
    }

    /// Parses the value as a point in time.
    ///
    /// Strings go through [`Timestamp::parse`]; numbers are read as
    /// milliseconds since the Unix epoch.
    pub fn to_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::String(s) => Timestamp::parse(s),
            Value::Number(n) => {
                let millis = n.to_f64();
                millis
                    .is_finite()
                    .then(|| Timestamp::from_millis(millis as i64))
            }
            Value::Bool(_) | Value::None => None,
        }
    }

    /// Returns `true` for `true`, non-zero numbers, and non-empty strings.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => {
                let f = n.to_f64();
                f != 0.0 && !f.is_nan()
            }
            Value::String(s) => !s.is_empty(),
            Value::None => false,
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),

            // Mixed type comparisons - convert to f64
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            // 2.0 renders as "2", the way a dashboard user typed it
            Number::F64(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

/// Timestamp value represented as milliseconds since Unix epoch.
///
/// Timezone-less inputs are read as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Parses a date or date-time string.
    ///
    /// Accepts RFC 3339 (`2024-01-15T10:30:00Z`), naive date-times with a `T`
    /// or space separator, and bare dates (`2024-01-15`, read as midnight UTC).
    ///
    /// ```
    /// use gridview::Timestamp;
    ///
    /// assert!(Timestamp::parse("2024-01-01").is_some());
    /// assert!(Timestamp::parse("2024-01-01") < Timestamp::parse("2024-01-01T00:00:01Z"));
    /// assert_eq!(Timestamp::parse("not-a-date"), None);
    /// ```
    pub fn parse(input: &str) -> Option<Timestamp> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Some(Timestamp(dt.timestamp_millis()));
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
                return Some(Timestamp(dt.and_utc().timestamp_millis()));
            }
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|dt| Timestamp(dt.and_utc().timestamp_millis()))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp_millis(self.0) {
            Some(dt) if self.0.rem_euclid(86_400_000) == 0 => {
                write!(f, "{}", dt.format("%Y-%m-%d"))
            }
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%SZ")),
            None => write!(f, "{}ms", self.0),
        }
    }
}
