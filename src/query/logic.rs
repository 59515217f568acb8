//! Comparison and boolean functions.

use crate::ast::varargs::collect_varargs;
use crate::ast::{Expr, call};

/// True when the values are in strictly increasing order.
pub fn lt<I>(values: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("lt", collect_varargs(values)).build()
}

pub fn lte<I>(values: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("lte", collect_varargs(values)).build()
}

/// True when the values are in strictly decreasing order.
pub fn gt<I>(values: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("gt", collect_varargs(values)).build()
}

pub fn gte<I>(values: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("gte", collect_varargs(values)).build()
}

pub fn and<I>(values: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("and", collect_varargs(values)).build()
}

pub fn or<I>(values: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("or", collect_varargs(values)).build()
}

pub fn not(value: impl Into<Expr>) -> Expr {
    call("not", value).build()
}
