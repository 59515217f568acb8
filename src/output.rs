//! JSON wire rendering for query expressions.
//!
//! This module implements [`serde::Serialize`] for [`Expr`] and [`Value`] and
//! provides compact and pretty-printed renderings of the wire document. Output
//! is deterministic: call fields and object keys appear in construction order.
//!
//! # Wire Shapes
//!
//! - **Primitives** - `null`, strings, integers, floats and booleans render as JSON primitives
//! - **Timestamps** - `{"@ts": "2015-01-01T00:00:00.5Z"}` (RFC 3339, UTC, fraction only when non-zero)
//! - **Dates** - `{"@date": "2015-01-01"}`
//! - **Bytes** - `{"@bytes": "AQID"}` (URL-safe base64 with padding)
//! - **References** - `{"@ref": "classes/users/123"}`
//! - **Calls** - one JSON object whose keys are the call's field names
//! - **Arrays** - JSON arrays
//!
//! # Examples
//!
//! ```
//! use fql_builder::query::add;
//! use fql_builder::output::{to_json, to_json_pretty};
//!
//! let expr = add([1, 2]);
//!
//! // Compact output
//! assert_eq!(to_json(&expr).unwrap(), r#"{"add":[1,2]}"#);
//!
//! // Pretty output
//! assert_eq!(
//!     to_json_pretty(&expr).unwrap(),
//!     "{\n  \"add\": [\n    1,\n    2\n  ]\n}"
//! );
//! ```

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use chrono::SecondsFormat;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ast::Expr;
use crate::error::Result;
use crate::value::Value;

/// Renders expressions to JSON text.
pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, expr: &Expr) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(expr)?
        } else {
            serde_json::to_string(expr)?
        };
        Ok(json)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Long(n) => serializer.serialize_i64(*n),
            Value::Double(n) => serializer.serialize_f64(*n),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Time(ts) => tagged(
                serializer,
                "@ts",
                &ts.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ),
            Value::Date(date) => tagged(serializer, "@date", &date.format("%Y-%m-%d").to_string()),
            Value::Bytes(bytes) => tagged(serializer, "@bytes", &URL_SAFE.encode(bytes)),
            Value::Ref(id) => tagged(serializer, "@ref", id),
        }
    }
}

fn tagged<S: Serializer>(
    serializer: S,
    tag: &'static str,
    text: &str,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(tag, text)?;
    map.end()
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Expr::Literal(value) => value.serialize(serializer),
            Expr::Call(call) => {
                let mut map = serializer.serialize_map(Some(call.len()))?;
                for (name, arg) in call.fields() {
                    map.serialize_entry(name, arg)?;
                }
                map.end()
            }
            Expr::Array(items) => serializer.collect_seq(items),
            Expr::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, value) in object.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = to_json(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

// Convenience functions

/// Converts an expression to its compact JSON wire form.
///
/// ```
/// use fql_builder::query::{obj, var};
/// use fql_builder::output::to_json;
///
/// let json = to_json(&obj([("name", var("n")), ("age", 30.into())])).unwrap();
/// assert_eq!(json, r#"{"object":{"name":{"var":"n"},"age":30}}"#);
/// ```
pub fn to_json(expr: &Expr) -> Result<String> {
    JsonPrinter::new(false).print(expr)
}

/// Converts an expression to pretty-printed JSON with 2-space indentation.
pub fn to_json_pretty(expr: &Expr) -> Result<String> {
    JsonPrinter::new(true).print(expr)
}

/// Converts an expression to a [`serde_json::Value`] document.
///
/// Key order is preserved. A call that repeats a field name keeps only the
/// last occurrence in the document form; [`to_json`] keeps every occurrence.
pub fn to_document(expr: &Expr) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(expr)?)
}
