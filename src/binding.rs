//! Two-phase builder for `let` expressions.

use std::mem;

use tracing::warn;

use crate::ast::{Expr, Object, call};
use crate::error::{Error, Result};

/// Builder for `{"let": {...}, "in": ...}` expressions.
///
/// A binding starts out [`Collecting`](LetBinding::Collecting) the ordered
/// name/expression pairs. Closing it with [`LetBinding::in_`] emits the `let`
/// call and leaves the builder [`Finalized`](LetBinding::Finalized); any further
/// use returns [`Error::BuilderMisuse`].
///
/// Binding order is kept because later bindings may refer to earlier ones.
/// Binding a name twice replaces the first expression in place.
///
/// ```
/// use fql_builder::query::{add, let_, var};
/// use fql_builder::output::to_json;
///
/// let mut binding = let_([("a", 1), ("b", 2)]);
/// let expr = binding.in_(add([var("a"), var("b")])).unwrap();
///
/// assert_eq!(
///     to_json(&expr).unwrap(),
///     r#"{"let":{"a":1,"b":2},"in":{"add":[{"var":"a"},{"var":"b"}]}}"#
/// );
/// assert!(binding.in_(var("a")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LetBinding {
    /// Collecting bindings; `in_` has not been called yet.
    Collecting(Object),
    /// The `let` expression has been emitted.
    Finalized,
}

impl LetBinding {
    pub fn new<I, K, V>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Expr>,
    {
        LetBinding::Collecting(Object::from_pairs(bindings))
    }

    /// Adds one more binding after the ones already collected.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Expr>) -> Result<&mut Self> {
        match self {
            LetBinding::Collecting(bindings) => {
                bindings.insert(name.into(), value.into());
                Ok(self)
            }
            LetBinding::Finalized => Err(misuse("bind called on a finalized let binding")),
        }
    }

    /// Closes the binding with the expression the bindings are visible in.
    pub fn in_(&mut self, body: impl Into<Expr>) -> Result<Expr> {
        match mem::replace(self, LetBinding::Finalized) {
            LetBinding::Collecting(bindings) => Ok(emit(bindings, body.into())),
            LetBinding::Finalized => Err(misuse("in_ called on a finalized let binding")),
        }
    }

    /// By-value form of [`LetBinding::in_`]; the builder cannot be reused
    /// afterwards because it has been moved.
    ///
    /// ```compile_fail
    /// use fql_builder::query::{let_, var};
    ///
    /// let binding = let_([("a", 1)]);
    /// let first = binding.into_expr(var("a"));
    /// let second = binding.into_expr(var("a"));
    /// ```
    pub fn into_expr(self, body: impl Into<Expr>) -> Result<Expr> {
        let mut binding = self;
        binding.in_(body)
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self, LetBinding::Finalized)
    }

    /// Names bound so far, in order. Empty once finalized.
    pub fn names(&self) -> Vec<&str> {
        match self {
            LetBinding::Collecting(bindings) => bindings.keys(),
            LetBinding::Finalized => Vec::new(),
        }
    }
}

fn emit(bindings: Object, body: Expr) -> Expr {
    call("let", Expr::Object(bindings)).field("in", body).build()
}

fn misuse(message: &'static str) -> Error {
    warn!(reason = message, "let binding reused after finalization");
    Error::BuilderMisuse(message)
}
