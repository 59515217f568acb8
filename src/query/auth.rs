//! Authentication functions.

use crate::ast::{Expr, call};
use crate::query::null;

/// Creates a token for `reference` using the credentials in `params`.
pub fn login(reference: impl Into<Expr>, params: impl Into<Expr>) -> Expr {
    call("login", reference).field("params", params).build()
}

/// Deletes the current token, or every token of the identity when
/// `invalidate_all` is true.
pub fn logout(invalidate_all: impl Into<Expr>) -> Expr {
    call("logout", invalidate_all).build()
}

pub fn identify(reference: impl Into<Expr>, password: impl Into<Expr>) -> Expr {
    call("identify", reference).field("password", password).build()
}

pub fn identity() -> Expr {
    call("identity", null()).build()
}

pub fn has_identity() -> Expr {
    call("has_identity", null()).build()
}
