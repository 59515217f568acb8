//! Basic forms: variables, lambdas, control flow and iteration.

use crate::ast::varargs::collect_varargs;
use crate::ast::{Expr, arr, call};
use crate::binding::LetBinding;
use crate::lambda;
use crate::symbol::SymbolGenerator;

/// Aborts the transaction with the given message.
pub fn abort(message: impl Into<Expr>) -> Expr {
    call("abort", message).build()
}

/// Calls a user-defined function with one or more arguments.
pub fn call_fn<I>(function: impl Into<Expr>, args: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("call", function)
        .field("arguments", collect_varargs(args))
        .build()
}

/// Wraps a lambda so it can be stored as a user-defined function body.
pub fn query(lambda: impl Into<Expr>) -> Expr {
    call("query", lambda).build()
}

/// Evaluates `expr` as of `timestamp`.
pub fn at(timestamp: impl Into<Expr>, expr: impl Into<Expr>) -> Expr {
    call("at", timestamp).field("expr", expr).build()
}

/// Starts a `let` expression; close it with [`LetBinding::in_`].
pub fn let_<I, K, V>(bindings: I) -> LetBinding
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Expr>,
{
    LetBinding::new(bindings)
}

/// References a variable bound by `let` or a lambda.
pub fn var(name: impl Into<String>) -> Expr {
    let name: String = name.into();
    call("var", name).build()
}

pub fn if_(condition: impl Into<Expr>, then: impl Into<Expr>, otherwise: impl Into<Expr>) -> Expr {
    call("if", condition)
        .field("then", then)
        .field("else", otherwise)
        .build()
}

/// Evaluates expressions in order and returns the last result.
///
/// Always renders an array, even for a single expression.
pub fn do_<I>(exprs: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("do", arr(exprs)).build()
}

/// A lambda binding `params` (a name or an array of names) in `body`.
pub fn lambda(params: impl Into<Expr>, body: impl Into<Expr>) -> Expr {
    call("lambda", params).field("expr", body).build()
}

pub fn map(collection: impl Into<Expr>, lambda: impl Into<Expr>) -> Expr {
    call("map", lambda).field("collection", collection).build()
}

pub fn foreach(collection: impl Into<Expr>, lambda: impl Into<Expr>) -> Expr {
    call("foreach", lambda).field("collection", collection).build()
}

pub fn filter(collection: impl Into<Expr>, lambda: impl Into<Expr>) -> Expr {
    call("filter", lambda).field("collection", collection).build()
}

/// [`map`] with a closure body; see [`lambda::map`].
pub fn map_fn<F>(collection: impl Into<Expr>, body: F) -> Expr
where
    F: FnOnce(Expr) -> Expr,
{
    lambda::map(SymbolGenerator::global(), collection, body)
}

/// [`foreach`] with a closure body; see [`lambda::foreach`].
pub fn foreach_fn<F>(collection: impl Into<Expr>, body: F) -> Expr
where
    F: FnOnce(Expr) -> Expr,
{
    lambda::foreach(SymbolGenerator::global(), collection, body)
}

/// [`filter`] with a closure predicate; see [`lambda::filter`].
pub fn filter_fn<F>(collection: impl Into<Expr>, predicate: F) -> Expr
where
    F: FnOnce(Expr) -> Expr,
{
    lambda::filter(SymbolGenerator::global(), collection, predicate)
}
