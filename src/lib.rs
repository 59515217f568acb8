//! # fql-builder
//!
//! Builds FQL query expressions as typed trees and renders them to the JSON
//! wire documents the database server evaluates. Nothing is evaluated locally.
//!
//! ```
//! use fql_builder::query::*;
//! use fql_builder::output::to_json;
//!
//! let expr = map_fn(paginate(match_(index("all_users"))), |user| get(user));
//! let json = to_json(&expr).unwrap();
//! assert!(json.starts_with(r#"{"map":{"lambda":"map"#));
//! ```
pub mod ast;
pub mod binding;
pub mod encode;
pub mod error;
pub mod lambda;
pub mod output;
pub mod pagination;
pub mod path;
pub mod query;
pub mod request;
pub mod symbol;
pub mod value;

pub use ast::{Call, Expr, Object};
pub use binding::LetBinding;
pub use encode::Encode;
pub use error::{Error, Result};
pub use output::{to_document, to_json, to_json_pretty};
pub use pagination::Pagination;
pub use path::{Path, PathSegment};
pub use request::{Request, RequestOptions, Transport, prepare};
pub use symbol::SymbolGenerator;
pub use value::Value;
