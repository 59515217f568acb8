//! Read functions.

use crate::ast::{Expr, call};
use crate::pagination::Pagination;

/// Fetches the instance behind `reference`.
pub fn get(reference: impl Into<Expr>) -> Expr {
    call("get", reference).build()
}

/// Fetches the instance as it was at `ts`.
pub fn get_at(reference: impl Into<Expr>, ts: impl Into<Expr>) -> Expr {
    call("get", reference).field("ts", ts).build()
}

pub fn key_from_secret(secret: impl Into<Expr>) -> Expr {
    call("key_from_secret", secret).build()
}

/// Starts a [`Pagination`] over `resource`.
///
/// Pages can be passed straight to [`map`](super::map),
/// [`foreach`](super::foreach) and [`filter`](super::filter); the
/// transformation applies to the page's data and cursors pass through.
pub fn paginate(resource: impl Into<Expr>) -> Pagination {
    Pagination::new(resource)
}

pub fn exists(reference: impl Into<Expr>) -> Expr {
    call("exists", reference).build()
}

pub fn exists_at(reference: impl Into<Expr>, ts: impl Into<Expr>) -> Expr {
    call("exists", reference).field("ts", ts).build()
}
