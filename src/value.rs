use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::{Error, Result};

/// A terminal literal inside a query expression.
///
/// Each variant is one wire category. Constructors never coerce between
/// categories: a [`Value::Long`] stays a long even when a double with the same
/// magnitude exists.
///
/// # Examples
///
/// ```
/// use fql_builder::Value;
///
/// let name = Value::string("alice");
/// let age = Value::long(30);
/// let score = Value::double(9.5).unwrap();
///
/// assert_ne!(Value::long(1), Value::double(1.0).unwrap());
/// assert!(Value::double(f64::NAN).is_err());
/// # let _ = (name, age, score);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null literal
    Null,

    /// UTF-8 string
    String(String),

    /// 64-bit signed integer
    Long(i64),

    /// Finite IEEE-754 double
    Double(f64),

    /// Boolean literal
    Boolean(bool),

    /// Timestamp normalized to UTC, nanosecond precision
    Time(DateTime<Utc>),

    /// Calendar date without a time component
    Date(NaiveDate),

    /// Raw byte sequence
    Bytes(Vec<u8>),

    /// Opaque server-assigned reference id
    Ref(String),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    pub fn long(value: i64) -> Self {
        Value::Long(value)
    }

    /// Builds a double literal.
    ///
    /// NaN and the infinities have no wire representation and are rejected.
    pub fn double(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::invalid_literal(
                "double",
                format!("{value} is not a finite number"),
            ));
        }
        Ok(Value::Double(value))
    }

    pub fn boolean(value: bool) -> Self {
        Value::Boolean(value)
    }

    /// Builds a timestamp literal, converting any offset to UTC.
    pub fn time<Tz: TimeZone>(value: DateTime<Tz>) -> Self {
        Value::Time(value.with_timezone(&Utc))
    }

    /// Parses an RFC 3339 timestamp such as `2015-01-01T10:00:00.25+02:00`.
    pub fn time_from_rfc3339(text: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(text)
            .map(Value::time)
            .map_err(|e| Error::invalid_literal("time", format!("'{text}': {e}")))
    }

    pub fn date(value: NaiveDate) -> Self {
        Value::Date(value)
    }

    /// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
    pub fn date_from_iso8601(text: &str) -> Result<Self> {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Value::Date)
            .map_err(|e| Error::invalid_literal("date", format!("'{text}': {e}")))
    }

    pub fn bytes(value: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(value.into())
    }

    /// Decodes URL-safe base64 text (the wire encoding of byte literals).
    pub fn bytes_from_base64(text: &str) -> Result<Self> {
        URL_SAFE
            .decode(text)
            .map(Value::Bytes)
            .map_err(|e| Error::invalid_literal("bytes", format!("'{text}': {e}")))
    }

    /// Builds a reference literal from its server-assigned id.
    pub fn reference(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::invalid_literal("ref", "reference id is empty"));
        }
        Ok(Value::Ref(id))
    }

    /// Name of the wire category, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "string",
            Value::Long(_) => "long",
            Value::Double(_) => "double",
            Value::Boolean(_) => "boolean",
            Value::Time(_) => "time",
            Value::Date(_) => "date",
            Value::Bytes(_) => "bytes",
            Value::Ref(_) => "ref",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Long(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Long(i64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Time(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl TryFrom<f64> for Value {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Value::double(value)
    }
}
