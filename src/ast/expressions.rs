use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};

use crate::value::Value;

/// A node of a query expression tree.
///
/// Nodes are immutable once built and never point back to their parents, so a
/// tree can be cloned, shared across threads and rendered any number of times.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Leaf literal
    ///
    /// # Example
    /// ```text
    /// 42
    /// "bob"
    /// {"@date": "2024-01-31"}
    /// ```
    Literal(Value),

    /// Remote function invocation
    ///
    /// # Example
    /// ```text
    /// {"select": ["data", "name"], "from": {"var": "user"}}
    /// ```
    Call(Call),

    /// Array literal
    ///
    /// # Example
    /// ```text
    /// [1, 2, {"var": "x"}]
    /// ```
    Array(Vec<Expr>),

    /// Object literal
    ///
    /// Only produced nested inside the `object` wrapper call or as the
    /// bindings of `let`. Code outside this crate can inspect the variant but
    /// cannot build it, so a bare object never reaches the wire:
    ///
    /// ```compile_fail
    /// use fql_builder::Expr;
    ///
    /// fn unwrap_object(expr: &Expr) -> Expr {
    ///     let object = expr.as_object().unwrap().clone();
    ///     Expr::Object(object)
    /// }
    /// ```
    #[non_exhaustive]
    Object(Object),
}

impl Expr {
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Expr::Literal(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&Call> {
        match self {
            Expr::Call(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Expr]> {
        match self {
            Expr::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Expr::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the variable name when this node is a `{"var": name}` reference.
    pub fn as_var(&self) -> Option<&str> {
        let call = self.as_call()?;
        if call.name() != "var" || call.len() != 1 {
            return None;
        }
        call.get("var")?.as_literal()?.as_str()
    }
}

/// An ordered list of named fields describing one remote function call.
///
/// The first field carries the function name and its primary argument, e.g.
/// `{"take": 2, "collection": [...]}`. Field names are kept exactly as
/// supplied; duplicates are not collapsed and nothing is sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    // never empty
    fields: Vec<(Cow<'static, str>, Expr)>,
}

impl Call {
    pub(crate) fn from_fields(fields: Vec<(Cow<'static, str>, Expr)>) -> Self {
        debug_assert!(!fields.is_empty());
        Call { fields }
    }

    /// Name of the remote function (the first field name).
    pub fn name(&self) -> &str {
        &self.fields[0].0
    }

    /// Returns the first field with the given name.
    pub fn get(&self, name: &str) -> Option<&Expr> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, expr)| expr)
    }

    /// Fields in construction order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = (&str, &Expr)> {
        self.fields.iter().map(|(name, expr)| (name.as_ref(), expr))
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_ref()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false: a call has at least its name field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An ordered map of user keys to expressions.
///
/// Keys are unique. Inserting a key that is already present replaces its
/// expression but keeps the key at its first position.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    fields: Vec<(String, Expr)>,
}

impl Object {
    pub(crate) fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Expr>,
    {
        let mut object = Object { fields: Vec::new() };
        for (key, value) in pairs {
            object.insert(key.into(), value.into());
        }
        object
    }

    pub(crate) fn insert(&mut self, key: String, value: Expr) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Expr> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Expr)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> Vec<&str> {
        self.fields.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Literal(value)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<u32> for Expr {
    fn from(value: u32) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<DateTime<Utc>> for Expr {
    fn from(value: DateTime<Utc>) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<NaiveDate> for Expr {
    fn from(value: NaiveDate) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<Vec<Expr>> for Expr {
    fn from(items: Vec<Expr>) -> Self {
        Expr::Array(items)
    }
}

impl From<&Expr> for Expr {
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}
