//! Time and date functions.

use crate::ast::{Expr, call};

/// Unit of the number passed to [`epoch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
}

impl TimeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Microsecond => "microsecond",
            TimeUnit::Nanosecond => "nanosecond",
        }
    }
}

impl From<TimeUnit> for Expr {
    fn from(unit: TimeUnit) -> Self {
        Expr::from(unit.as_str())
    }
}

/// Parses an ISO-8601 timestamp on the server. `"now"` is the transaction time.
pub fn time(text: impl Into<Expr>) -> Expr {
    call("time", text).build()
}

/// A timestamp `num` units after the Unix epoch.
pub fn epoch(num: impl Into<Expr>, unit: impl Into<Expr>) -> Expr {
    call("epoch", num).field("unit", unit).build()
}

/// Parses an ISO-8601 date on the server.
pub fn date(text: impl Into<Expr>) -> Expr {
    call("date", text).build()
}
