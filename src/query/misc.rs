//! Miscellaneous functions: ids, equality and path selection.

use crate::ast::varargs::collect_varargs;
use crate::ast::{Expr, call};
use crate::query::null;

pub use crate::path::{Path, PathSegment, path};

/// A fresh unique id.
pub fn new_id() -> Expr {
    call("new_id", null()).build()
}

/// Deprecated server alias of [`new_id`].
pub fn next_id() -> Expr {
    call("next_id", null()).build()
}

/// True when all values are equal.
pub fn equals<I>(values: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("equals", collect_varargs(values)).build()
}

/// True when `path` (an array of keys and indexes) exists in `input`.
pub fn contains(path: impl Into<Expr>, input: impl Into<Expr>) -> Expr {
    call("contains", path).field("in", input).build()
}

pub fn contains_path(path: &Path, input: impl Into<Expr>) -> Expr {
    contains(path.to_expr(), input)
}

/// The value at `path` inside `from`.
pub fn select(path: impl Into<Expr>, from: impl Into<Expr>) -> Expr {
    call("select", path).field("from", from).build()
}

/// The value at `path` inside `from`, or `default` when absent.
pub fn select_or(path: impl Into<Expr>, from: impl Into<Expr>, default: impl Into<Expr>) -> Expr {
    call("select", path)
        .field("from", from)
        .field("default", default)
        .build()
}

pub fn select_path(path: &Path, from: impl Into<Expr>) -> Expr {
    select(path.to_expr(), from)
}

pub fn select_path_or(path: &Path, from: impl Into<Expr>, default: impl Into<Expr>) -> Expr {
    select_or(path.to_expr(), from, default)
}

/// Every value at `path`, descending through arrays.
pub fn select_all(path: impl Into<Expr>, from: impl Into<Expr>) -> Expr {
    call("select_all", path).field("from", from).build()
}

pub fn select_all_or(
    path: impl Into<Expr>,
    from: impl Into<Expr>,
    default: impl Into<Expr>,
) -> Expr {
    call("select_all", path)
        .field("from", from)
        .field("default", default)
        .build()
}

pub fn select_all_path(path: &Path, from: impl Into<Expr>) -> Expr {
    select_all(path.to_expr(), from)
}
