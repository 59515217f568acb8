//! Type conversion functions.

use crate::ast::{Expr, call};

pub fn to_string(value: impl Into<Expr>) -> Expr {
    call("to_string", value).build()
}

pub fn to_number(value: impl Into<Expr>) -> Expr {
    call("to_number", value).build()
}

pub fn to_time(value: impl Into<Expr>) -> Expr {
    call("to_time", value).build()
}

pub fn to_date(value: impl Into<Expr>) -> Expr {
    call("to_date", value).build()
}
