//! Set functions.

use crate::ast::varargs::collect_varargs;
use crate::ast::{Expr, call};
use crate::lambda;
use crate::symbol::SymbolGenerator;

/// The set containing only `reference`.
pub fn singleton(reference: impl Into<Expr>) -> Expr {
    call("singleton", reference).build()
}

/// The set of events of a reference or set.
pub fn events(ref_set: impl Into<Expr>) -> Expr {
    call("events", ref_set).build()
}

/// The set of values in an index without terms.
pub fn match_(index: impl Into<Expr>) -> Expr {
    call("match", index).build()
}

/// The set of values in an index matching `terms`.
pub fn match_terms(index: impl Into<Expr>, terms: impl Into<Expr>) -> Expr {
    call("match", index).field("terms", terms).build()
}

pub fn union<I>(sets: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("union", collect_varargs(sets)).build()
}

pub fn intersection<I>(sets: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("intersection", collect_varargs(sets)).build()
}

pub fn difference<I>(sets: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    call("difference", collect_varargs(sets)).build()
}

pub fn distinct(set: impl Into<Expr>) -> Expr {
    call("distinct", set).build()
}

/// Joins each element of `source` with `target` (an index or a lambda).
pub fn join(source: impl Into<Expr>, target: impl Into<Expr>) -> Expr {
    call("join", source).field("with", target).build()
}

/// [`join`] with a closure target; see [`lambda::join`].
pub fn join_fn<F>(source: impl Into<Expr>, target: F) -> Expr
where
    F: FnOnce(Expr) -> Expr,
{
    lambda::join(SymbolGenerator::global(), source, target)
}
