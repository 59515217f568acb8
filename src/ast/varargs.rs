use crate::ast::expressions::Expr;

/// Normalizes a "one value or an array of values" argument.
///
/// A single expression is returned as is; any other count, zero included,
/// becomes an array literal in the given order. Every variadic constructor in
/// [`query`](crate::query) goes through here, so `add([x])` and a one-argument
/// `{"add": x}` render identically.
///
/// ```
/// use fql_builder::ast::{varargs, Expr};
///
/// assert_eq!(varargs(vec![Expr::from(1)]), Expr::from(1));
/// assert_eq!(varargs(vec![]), Expr::Array(vec![]));
/// ```
pub fn varargs(exprs: Vec<Expr>) -> Expr {
    match <[Expr; 1]>::try_from(exprs) {
        Ok([single]) => single,
        Err(exprs) => Expr::Array(exprs),
    }
}

/// Collects any iterable of expression-like values and normalizes it.
pub(crate) fn collect_varargs<I>(items: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    varargs(items.into_iter().map(Into::into).collect())
}
