//! Write functions.

use crate::ast::{Expr, call};

/// Event action used by [`insert`] and [`remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Delete,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Delete => "delete",
        }
    }
}

impl From<Action> for Expr {
    fn from(action: Action) -> Self {
        Expr::from(action.as_str())
    }
}

/// Creates an instance of the class `reference` with `params`.
pub fn create(reference: impl Into<Expr>, params: impl Into<Expr>) -> Expr {
    call("create", reference).field("params", params).build()
}

/// Merges `params` into an existing instance.
pub fn update(reference: impl Into<Expr>, params: impl Into<Expr>) -> Expr {
    call("update", reference).field("params", params).build()
}

/// Replaces an instance's data with `params`.
pub fn replace(reference: impl Into<Expr>, params: impl Into<Expr>) -> Expr {
    call("replace", reference).field("params", params).build()
}

pub fn delete(reference: impl Into<Expr>) -> Expr {
    call("delete", reference).build()
}

/// Adds an event to an instance's history.
pub fn insert(
    reference: impl Into<Expr>,
    ts: impl Into<Expr>,
    action: impl Into<Expr>,
    params: impl Into<Expr>,
) -> Expr {
    call("insert", reference)
        .field("ts", ts)
        .field("action", action)
        .field("params", params)
        .build()
}

/// Removes an event from an instance's history.
pub fn remove(reference: impl Into<Expr>, ts: impl Into<Expr>, action: impl Into<Expr>) -> Expr {
    call("remove", reference)
        .field("ts", ts)
        .field("action", action)
        .build()
}

pub fn create_class(params: impl Into<Expr>) -> Expr {
    call("create_class", params).build()
}

pub fn create_database(params: impl Into<Expr>) -> Expr {
    call("create_database", params).build()
}

pub fn create_key(params: impl Into<Expr>) -> Expr {
    call("create_key", params).build()
}

pub fn create_index(params: impl Into<Expr>) -> Expr {
    call("create_index", params).build()
}

pub fn create_function(params: impl Into<Expr>) -> Expr {
    call("create_function", params).build()
}
