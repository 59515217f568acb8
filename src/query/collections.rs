//! Collection functions.

use crate::ast::{Expr, call};

/// The first `num` elements of `collection`.
pub fn take(num: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    call("take", num).field("collection", collection).build()
}

/// `collection` without its first `num` elements.
pub fn drop(num: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    call("drop", num).field("collection", collection).build()
}

pub fn prepend(elements: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    call("prepend", elements).field("collection", collection).build()
}

pub fn append(elements: impl Into<Expr>, collection: impl Into<Expr>) -> Expr {
    call("append", elements).field("collection", collection).build()
}

pub fn is_empty(collection: impl Into<Expr>) -> Expr {
    call("is_empty", collection).build()
}

pub fn is_nonempty(collection: impl Into<Expr>) -> Expr {
    call("is_nonempty", collection).build()
}
