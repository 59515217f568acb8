//! Literals, references and resource sets.

use crate::ast::{Expr, call};
use crate::encode::Encode;
use crate::error::Result;
use crate::value::Value;

pub use crate::ast::{arr, obj};

/// The null literal.
pub fn null() -> Expr {
    Expr::Literal(Value::Null)
}

/// Encodes any supported host value (see [`Encode`]).
pub fn value<T: Encode + ?Sized>(value: &T) -> Result<Expr> {
    value.encode()
}

/// A reference from its full id, e.g. `classes/users/123`.
///
/// Prefer [`ref_in`] with a class, index or database reference.
pub fn ref_(id: impl Into<String>) -> Result<Expr> {
    Ok(Expr::Literal(Value::reference(id)?))
}

/// A reference scoped to a class, index, function or database reference.
pub fn ref_in(scope: impl Into<Expr>, id: impl Into<Expr>) -> Expr {
    call("ref", scope).field("id", id).build()
}

macro_rules! resource_sets {
    ($($name:ident, $scoped:ident, $fn_name:literal;)*) => {
        $(
            #[doc = concat!("The set of all ", $fn_name, " in the current database.")]
            pub fn $name() -> Expr {
                $scoped(null())
            }

            #[doc = concat!("The set of all ", $fn_name, " in the given database scope.")]
            pub fn $scoped(scope: impl Into<Expr>) -> Expr {
                call($fn_name, scope).build()
            }
        )*
    };
}

resource_sets! {
    classes, classes_in, "classes";
    databases, databases_in, "databases";
    indexes, indexes_in, "indexes";
    functions, functions_in, "functions";
    keys, keys_in, "keys";
    tokens, tokens_in, "tokens";
    credentials, credentials_in, "credentials";
}

/// A reference to the class with the given name.
pub fn class(name: impl Into<Expr>) -> Expr {
    call("class", name).build()
}

/// A reference to a class inside another database.
pub fn class_in(name: impl Into<Expr>, database: impl Into<Expr>) -> Expr {
    call("class", name).field("scope", database).build()
}

pub fn database(name: impl Into<Expr>) -> Expr {
    call("database", name).build()
}

pub fn database_in(name: impl Into<Expr>, database: impl Into<Expr>) -> Expr {
    call("database", name).field("scope", database).build()
}

pub fn index(name: impl Into<Expr>) -> Expr {
    call("index", name).build()
}

pub fn index_in(name: impl Into<Expr>, database: impl Into<Expr>) -> Expr {
    call("index", name).field("scope", database).build()
}

pub fn function(name: impl Into<Expr>) -> Expr {
    call("function", name).build()
}

pub fn function_in(name: impl Into<Expr>, database: impl Into<Expr>) -> Expr {
    call("function", name).field("scope", database).build()
}
