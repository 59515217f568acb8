//! Lambda shorthands that take a host closure instead of a lambda expression.
//!
//! Each shorthand asks the [`SymbolGenerator`] for a fresh parameter name,
//! passes a `{"var": name}` reference to the closure and wraps the returned body
//! in a `lambda` call. Nested shorthands therefore always bind different names,
//! and an inner body can never capture an outer parameter by accident.
//!
//! ```
//! use fql_builder::SymbolGenerator;
//! use fql_builder::lambda;
//! use fql_builder::query::{add, arr};
//!
//! let symbols = SymbolGenerator::new();
//! let expr = lambda::map(&symbols, arr([1, 2, 3]), |x| add([x, 1.into()]));
//!
//! let lambda = expr.as_call().unwrap().get("map").unwrap().as_call().unwrap();
//! assert_eq!(lambda.get("lambda").unwrap().as_literal().unwrap().as_str(), Some("map_1"));
//! ```

use crate::ast::Expr;
use crate::query;
use crate::symbol::SymbolGenerator;

/// Builds `lambda(sym, body(var(sym)))` with a fresh `sym` scoped by `prefix`.
pub fn hygienic<F>(symbols: &SymbolGenerator, prefix: &str, body: F) -> Expr
where
    F: FnOnce(Expr) -> Expr,
{
    let symbol = symbols.generate(prefix);
    let param = query::var(symbol.as_str());
    query::lambda(symbol, body(param))
}

/// `map` over `collection` with a closure body.
pub fn map<F>(symbols: &SymbolGenerator, collection: impl Into<Expr>, body: F) -> Expr
where
    F: FnOnce(Expr) -> Expr,
{
    query::map(collection, hygienic(symbols, "map", body))
}

/// `foreach` over `collection` with a closure body.
pub fn foreach<F>(symbols: &SymbolGenerator, collection: impl Into<Expr>, body: F) -> Expr
where
    F: FnOnce(Expr) -> Expr,
{
    query::foreach(collection, hygienic(symbols, "foreach", body))
}

/// `filter` over `collection` with a closure predicate.
pub fn filter<F>(symbols: &SymbolGenerator, collection: impl Into<Expr>, predicate: F) -> Expr
where
    F: FnOnce(Expr) -> Expr,
{
    query::filter(collection, hygienic(symbols, "filter", predicate))
}

/// `join` of `source` with a closure target.
pub fn join<F>(symbols: &SymbolGenerator, source: impl Into<Expr>, target: F) -> Expr
where
    F: FnOnce(Expr) -> Expr,
{
    query::join(source, hygienic(symbols, "join", target))
}
