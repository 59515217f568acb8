use std::sync::Arc;

use crate::ast::Expr;
use crate::value::Value;

/// A segment of a path selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object field access by name
    ///
    /// # Examples
    /// - `path(["data"])` → `Field("data")`
    /// - `path(["data", "email"])` → `[Field("data"), Field("email")]`
    Field(String),

    /// Array element access by index
    ///
    /// # Examples
    /// - `path(["items"]).at([0])` → `[Field("items"), Index(0)]`
    Index(i64),
}

impl PathSegment {
    fn to_expr(&self) -> Expr {
        match self {
            PathSegment::Field(name) => Expr::Literal(Value::String(name.clone())),
            PathSegment::Index(idx) => Expr::Literal(Value::Long(*idx)),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Field(name)
    }
}

impl From<i64> for PathSegment {
    fn from(idx: i64) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<i32> for PathSegment {
    fn from(idx: i32) -> Self {
        PathSegment::Index(i64::from(idx))
    }
}

#[derive(Debug)]
struct Link {
    segment: PathSegment,
    parent: Option<Arc<Link>>,
}

/// An immutable sequence of selectors addressing a location inside a
/// document, used by [`contains_path`](crate::query::contains_path),
/// [`select_path`](crate::query::select_path) and friends.
///
/// Narrowing with [`Path::at`] returns a new path and leaves the receiver
/// untouched. The new path shares the receiver's segments instead of copying
/// them, so building many paths off a common prefix stays cheap.
///
/// For the selector `data.items[0].price` the segments are:
/// - `PathSegment::Field("data")`
/// - `PathSegment::Field("items")`
/// - `PathSegment::Index(0)`
/// - `PathSegment::Field("price")`
///
/// ```
/// use fql_builder::{Path, PathSegment};
///
/// let items = Path::new().at(["data", "items"]);
/// let first = items.at([0]);
///
/// assert_eq!(items.len(), 2);
/// assert_eq!(first.segments().last().copied(), Some(&PathSegment::Index(0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Path {
    last: Option<Arc<Link>>,
    len: usize,
}

impl Path {
    /// The empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new path with `segments` appended in order.
    #[must_use]
    pub fn at<I>(&self, segments: I) -> Path
    where
        I: IntoIterator,
        I::Item: Into<PathSegment>,
    {
        let mut last = self.last.clone();
        let mut len = self.len;
        for segment in segments {
            last = Some(Arc::new(Link {
                segment: segment.into(),
                parent: last,
            }));
            len += 1;
        }
        Path { last, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Segments from the root outwards.
    pub fn segments(&self) -> Vec<&PathSegment> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.last.as_deref();
        while let Some(link) = cursor {
            out.push(&link.segment);
            cursor = link.parent.as_deref();
        }
        out.reverse();
        out
    }

    /// Converts the path into the array literal consumed by `select`,
    /// `select_all` and `contains`.
    pub fn to_expr(&self) -> Expr {
        Expr::Array(self.segments().into_iter().map(PathSegment::to_expr).collect())
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.segments() == other.segments()
    }
}

impl Eq for Path {}

/// Starts a path from the given segments.
pub fn path<I>(segments: I) -> Path
where
    I: IntoIterator,
    I::Item: Into<PathSegment>,
{
    Path::new().at(segments)
}
