use crate::ast::{Expr, call};

/// Builder for `paginate` expressions.
///
/// Wraps a resource (a set reference such as `match_(index("all_users"))`)
/// with optional cursor, size and flag fields. Fields render in a fixed order:
/// `paginate`, `ts`, `after`, `before`, `size`, `events`, `sources`. The two
/// flags only appear when set to `true`.
///
/// ```
/// use fql_builder::query::{index, match_, paginate};
/// use fql_builder::output::to_json;
///
/// let page = paginate(match_(index("all_users"))).size(20).after("cursor");
/// assert_eq!(
///     to_json(&page.build()).unwrap(),
///     r#"{"paginate":{"match":{"index":"all_users"}},"after":"cursor","size":20}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Pagination {
    resource: Expr,
    ts: Option<Expr>,
    after: Option<Expr>,
    before: Option<Expr>,
    size: Option<Expr>,
    events: bool,
    sources: bool,
}

impl Pagination {
    pub fn new(resource: impl Into<Expr>) -> Self {
        Pagination {
            resource: resource.into(),
            ts: None,
            after: None,
            before: None,
            size: None,
            events: false,
            sources: false,
        }
    }

    /// Reads the page as of the given timestamp.
    pub fn ts(mut self, ts: impl Into<Expr>) -> Self {
        self.ts = Some(ts.into());
        self
    }

    /// Returns the page after the given cursor.
    pub fn after(mut self, cursor: impl Into<Expr>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Returns the page before the given cursor.
    pub fn before(mut self, cursor: impl Into<Expr>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    pub fn size(mut self, size: impl Into<Expr>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Returns the set's events instead of its elements.
    pub fn events(mut self, events: bool) -> Self {
        self.events = events;
        self
    }

    /// Includes the source sets of each element.
    pub fn sources(mut self, sources: bool) -> Self {
        self.sources = sources;
        self
    }

    pub fn build(self) -> Expr {
        call("paginate", self.resource)
            .field_opt("ts", self.ts)
            .field_opt("after", self.after)
            .field_opt("before", self.before)
            .field_opt("size", self.size)
            .field_opt("events", self.events.then_some(true))
            .field_opt("sources", self.sources.then_some(true))
            .build()
    }
}

impl From<Pagination> for Expr {
    fn from(pagination: Pagination) -> Self {
        pagination.build()
    }
}
