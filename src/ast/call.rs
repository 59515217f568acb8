use std::borrow::Cow;

use crate::ast::expressions::{Call, Expr, Object};

/// Reserved function name that wraps user-supplied object literals.
pub const OBJECT_WRAPPER: &str = "object";

/// Builder for a [`Call`] node.
///
/// Fields are emitted in the order they are added. Nothing is sorted,
/// deduplicated or checked against the remote function's schema.
///
/// # Examples
///
/// ```
/// use fql_builder::ast::{arr, call};
/// use fql_builder::output::to_json;
///
/// let expr = call("select", arr(["data", "name"]))
///     .field("from", call("var", "user"))
///     .build();
///
/// assert_eq!(
///     to_json(&expr).unwrap(),
///     r#"{"select":["data","name"],"from":{"var":"user"}}"#
/// );
/// ```
#[derive(Debug, Clone)]
#[must_use = "a call builder does nothing until it is built"]
pub struct CallBuilder {
    fields: Vec<(Cow<'static, str>, Expr)>,
}

/// Starts a call to the remote function `name` with its primary argument.
pub fn call(name: impl Into<Cow<'static, str>>, arg: impl Into<Expr>) -> CallBuilder {
    CallBuilder {
        fields: vec![(name.into(), arg.into())],
    }
}

impl CallBuilder {
    /// Appends a named field.
    pub fn field(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Expr>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Appends a named field only when a value is present.
    pub fn field_opt<V>(self, name: impl Into<Cow<'static, str>>, value: Option<V>) -> Self
    where
        V: Into<Expr>,
    {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    pub fn build(self) -> Expr {
        Expr::Call(Call::from_fields(self.fields))
    }
}

impl From<CallBuilder> for Expr {
    fn from(builder: CallBuilder) -> Self {
        builder.build()
    }
}

/// Builds an object from ordered key/expression pairs.
///
/// The map is always nested inside the reserved `object` call, so user keys
/// such as `let` or `object` can never be read as control fields.
///
/// ```
/// use fql_builder::ast::obj;
/// use fql_builder::output::to_json;
///
/// let expr = obj([("let", 1), ("in", 2)]);
/// assert_eq!(to_json(&expr).unwrap(), r#"{"object":{"let":1,"in":2}}"#);
/// ```
pub fn obj<I, K, V>(pairs: I) -> Expr
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Expr>,
{
    call(OBJECT_WRAPPER, Expr::Object(Object::from_pairs(pairs))).build()
}

/// Builds an array literal.
pub fn arr<I>(items: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    Expr::Array(items.into_iter().map(Into::into).collect())
}
